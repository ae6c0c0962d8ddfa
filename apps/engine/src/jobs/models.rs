use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Jobs posted within this many days count as recent.
const RECENT_POSTING_DAYS: i64 = 7;

/// A job board entry. Catalog entries are defined once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub accessibility_friendly: bool,
    #[serde(default)]
    pub disability_accommodations: Vec<String>,
}

impl Job {
    /// Whole days between posting and `today`; never negative.
    pub fn days_since_posted(&self, today: NaiveDate) -> i64 {
        (today - self.posted_date).num_days().max(0)
    }

    pub fn is_recently_posted(&self, today: NaiveDate) -> bool {
        self.days_since_posted(today) <= RECENT_POSTING_DAYS
    }

    /// "Posted 1 day ago" / "Posted 3 days ago"
    pub fn posted_label(&self, today: NaiveDate) -> String {
        let days = self.days_since_posted(today);
        let unit = if days == 1 { "day" } else { "days" };
        format!("Posted {days} {unit} ago")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Coarse bucket of a match percentage. Shared by job-card badges and the
/// high-match alert, so both always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    pub const HIGH_MIN: u32 = 70;
    pub const MEDIUM_MIN: u32 = 50;

    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= Self::HIGH_MIN {
            MatchLevel::High
        } else if percentage >= Self::MEDIUM_MIN {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::High => "High Match",
            MatchLevel::Medium => "Medium Match",
            MatchLevel::Low => "Low Match",
        }
    }

    /// Badge class key used by job-card rendering.
    pub fn class(&self) -> &'static str {
        match self {
            MatchLevel::High => "high",
            MatchLevel::Medium => "medium",
            MatchLevel::Low => "low",
        }
    }
}

/// A job scored against a candidate's skills. Computed fresh for every
/// display; cheap and side-effect free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch<'a> {
    pub job: &'a Job,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl JobMatch<'_> {
    pub fn level(&self) -> MatchLevel {
        MatchLevel::from_percentage(self.match_percentage)
    }
}
