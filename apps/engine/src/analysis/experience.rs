//! Years-of-experience detection.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

/// Reported when no pattern yields a positive span. A CV without explicit
/// duration text is scored as a junior profile rather than zero.
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 2;

/// "5 years experience", "10+ years of experience"
static YEARS_OF_EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\+?\s*years?\s+(?:of\s+)?experience").unwrap()
});

/// "Experience: 7 years"
static EXPERIENCE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)experience[:\s]+([0-9]+)\+?\s*years?").unwrap());

/// "2015 - 2020", "2019–present", "2021 - current"
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{4})\s*[-–]\s*(present|current|[0-9]{4})").unwrap()
});

/// The capture is all ASCII digits, so a parse failure can only be overflow.
fn saturating_years(digits: &str) -> u32 {
    digits
        .parse::<u64>()
        .map_or(u32::MAX, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Detects years of experience relative to the current calendar year.
pub fn detect_experience_years(text: &str) -> u32 {
    detect_experience_years_at(text, Utc::now().year())
}

/// Detects years of experience, resolving "present"/"current" to `current_year`.
///
/// Takes the maximum over every match of all three patterns. Descending date
/// ranges contribute 0, never a negative span.
pub fn detect_experience_years_at(text: &str, current_year: i32) -> u32 {
    let explicit = [&*YEARS_OF_EXPERIENCE_RE, &*EXPERIENCE_LABEL_RE]
        .into_iter()
        .flat_map(|re| re.captures_iter(text))
        .map(|caps| saturating_years(&caps[1]));

    let ranges = DATE_RANGE_RE.captures_iter(text).filter_map(|caps| {
        let start: i32 = caps[1].parse().ok()?;
        let end_raw = &caps[2];
        let end = if end_raw.chars().all(|c| c.is_ascii_digit()) {
            end_raw.parse().ok()?
        } else {
            current_year
        };
        Some(u32::try_from(end - start).unwrap_or(0))
    });

    match explicit.chain(ranges).max().unwrap_or(0) {
        0 => DEFAULT_EXPERIENCE_YEARS,
        years => years,
    }
}
