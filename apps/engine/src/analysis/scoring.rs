use serde::{Deserialize, Serialize};

use crate::analysis::contact::ContactSignals;
use crate::analysis::education::Education;

pub const SKILLS_WEIGHT: f64 = 0.35;
pub const EXPERIENCE_WEIGHT: f64 = 0.25;
pub const EDUCATION_WEIGHT: f64 = 0.25;
pub const FORMAT_WEIGHT: f64 = 0.15;

/// Detected skills needed for a full skills score.
const SKILLS_FOR_FULL_SCORE: f64 = 10.0;
/// Years of experience needed for a full experience score.
const YEARS_FOR_FULL_SCORE: f64 = 10.0;

const FORMAT_BASE: u32 = 50;
const FORMAT_EMAIL_BONUS: u32 = 20;
const FORMAT_PHONE_BONUS: u32 = 15;
const FORMAT_CONTENT_BONUS: u32 = 10;
const FORMAT_DETAIL_BONUS: u32 = 5;
const CONTENT_THRESHOLD_CHARS: usize = 500;
const DETAIL_THRESHOLD_CHARS: usize = 1000;

/// Per-category scores, each 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub format: u32,
}

impl CategoryScores {
    pub fn compute(
        skill_count: usize,
        experience_years: u32,
        education: &Education,
        contact: ContactSignals,
        text_chars: usize,
    ) -> Self {
        Self {
            skills: skills_score(skill_count),
            experience: experience_score(experience_years),
            education: education_score(education.level),
            format: format_score(contact, text_chars),
        }
    }

    /// Weighted overall score: 0.35*skills + 0.25*experience + 0.25*education + 0.15*format
    pub fn overall(&self) -> u32 {
        let weighted = self.skills as f64 * SKILLS_WEIGHT
            + self.experience as f64 * EXPERIENCE_WEIGHT
            + self.education as f64 * EDUCATION_WEIGHT
            + self.format as f64 * FORMAT_WEIGHT;
        weighted.round().clamp(0.0, 100.0) as u32
    }

    fn as_array(&self) -> [u32; 4] {
        [self.skills, self.experience, self.education, self.format]
    }

    /// Categories scoring at or above `threshold`.
    pub fn count_at_least(&self, threshold: u32) -> usize {
        self.as_array().iter().filter(|&&s| s >= threshold).count()
    }
}

pub fn skills_score(skill_count: usize) -> u32 {
    scaled(skill_count as f64, SKILLS_FOR_FULL_SCORE)
}

pub fn experience_score(years: u32) -> u32 {
    scaled(years as f64, YEARS_FOR_FULL_SCORE)
}

pub fn education_score(level: u8) -> u32 {
    (level.min(4) as u32) * 25
}

pub fn format_score(contact: ContactSignals, text_chars: usize) -> u32 {
    let mut score = FORMAT_BASE;
    if contact.has_email {
        score += FORMAT_EMAIL_BONUS;
    }
    if contact.has_phone {
        score += FORMAT_PHONE_BONUS;
    }
    if text_chars > CONTENT_THRESHOLD_CHARS {
        score += FORMAT_CONTENT_BONUS;
    }
    if text_chars > DETAIL_THRESHOLD_CHARS {
        score += FORMAT_DETAIL_BONUS;
    }
    score.min(100)
}

fn scaled(value: f64, full_at: f64) -> u32 {
    ((value / full_at) * 100.0).min(100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(has_email: bool, has_phone: bool) -> ContactSignals {
        ContactSignals {
            has_email,
            has_phone,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = SKILLS_WEIGHT + EXPERIENCE_WEIGHT + EDUCATION_WEIGHT + FORMAT_WEIGHT;
        assert!((sum - 1.0).abs() < f64::EPSILON, "weights sum to {sum}");
    }

    #[test]
    fn test_skills_score_saturates_at_ten() {
        assert_eq!(skills_score(0), 0);
        assert_eq!(skills_score(7), 70);
        assert_eq!(skills_score(10), 100);
        assert_eq!(skills_score(25), 100);
    }

    #[test]
    fn test_skills_score_is_monotonic() {
        let scores: Vec<u32> = (0..20).map(skills_score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_experience_score() {
        assert_eq!(experience_score(2), 20);
        assert_eq!(experience_score(40), 100);
    }

    #[test]
    fn test_education_score_steps() {
        let steps: Vec<u32> = (0..=4).map(education_score).collect();
        assert_eq!(steps, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_format_score_bonuses() {
        assert_eq!(format_score(contact(false, false), 0), 50);
        assert_eq!(format_score(contact(true, false), 0), 70);
        assert_eq!(format_score(contact(true, true), 100), 85);
        assert_eq!(format_score(contact(false, false), 501), 60);
        assert_eq!(format_score(contact(true, true), 1001), 100);
    }

    #[test]
    fn test_format_length_thresholds_are_strict() {
        assert_eq!(format_score(contact(false, false), 500), 50);
        assert_eq!(format_score(contact(false, false), 1000), 60);
    }

    #[test]
    fn test_overall_matches_weighted_formula() {
        let scores = CategoryScores {
            skills: 70,
            experience: 50,
            education: 50,
            format: 85,
        };
        // 24.5 + 12.5 + 12.5 + 12.75 = 62.25
        assert_eq!(scores.overall(), 62);
    }

    #[test]
    fn test_overall_of_empty_profile() {
        let scores = CategoryScores::compute(0, 2, &Education::default(), contact(false, false), 0);
        assert_eq!(scores.format, 50);
        assert_eq!(scores.overall(), 25);
    }

    #[test]
    fn test_overall_bounds() {
        let max = CategoryScores {
            skills: 100,
            experience: 100,
            education: 100,
            format: 100,
        };
        let min = CategoryScores {
            skills: 0,
            experience: 0,
            education: 0,
            format: 0,
        };
        assert_eq!(max.overall(), 100);
        assert_eq!(min.overall(), 0);
    }

    #[test]
    fn test_count_at_least() {
        let scores = CategoryScores {
            skills: 70,
            experience: 69,
            education: 100,
            format: 50,
        };
        assert_eq!(scores.count_at_least(70), 2);
    }
}
