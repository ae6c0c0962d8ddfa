//! Highest-degree detection from degree keywords.

use serde::{Deserialize, Serialize};

/// Detected education level. `level` runs from 0 (none) to 4 (doctorate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub level: u8,
    pub name: String,
}

impl Education {
    fn new(level: u8, name: &str) -> Self {
        Self {
            level,
            name: name.to_string(),
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Education::new(2, "Bachelor's Degree")
    }
}

/// Keywords in priority order. The first keyword found wins, so higher
/// degrees must be listed before the ones they commonly co-occur with.
const DEGREE_KEYWORDS: &[(&str, u8, &str)] = &[
    ("phd", 4, "Ph.D."),
    ("doctorate", 4, "Doctorate"),
    ("master", 3, "Master's Degree"),
    ("mba", 3, "MBA"),
    ("bachelor", 2, "Bachelor's Degree"),
    ("associate", 1, "Associate Degree"),
    ("diploma", 1, "Diploma"),
];

/// Returns the first degree keyword found in the text, defaulting to a
/// bachelor's degree when none is present.
pub fn detect_education(text: &str) -> Education {
    let text_lower = text.to_lowercase();
    DEGREE_KEYWORDS
        .iter()
        .find(|(keyword, _, _)| text_lower.contains(keyword))
        .map(|(_, level, name)| Education::new(*level, name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_defaults_to_bachelor() {
        assert_eq!(detect_education(""), Education::new(2, "Bachelor's Degree"));
    }

    #[test]
    fn test_phd_beats_bachelor() {
        let edu = detect_education("Bachelor of Science, then a PhD in Physics");
        assert_eq!(edu.level, 4);
        assert_eq!(edu.name, "Ph.D.");
    }

    #[test]
    fn test_master_beats_bachelor() {
        let edu = detect_education("Bachelor of Arts; Master of Science");
        assert_eq!(edu, Education::new(3, "Master's Degree"));
    }

    #[test]
    fn test_mba_detected() {
        assert_eq!(detect_education("MBA, Wharton").name, "MBA");
    }

    #[test]
    fn test_low_levels() {
        assert_eq!(detect_education("Associate degree in nursing").level, 1);
        assert_eq!(detect_education("High school diploma").name, "Diploma");
    }

    #[test]
    fn test_doctorate_label() {
        assert_eq!(detect_education("Doctorate in Law"), Education::new(4, "Doctorate"));
    }
}
