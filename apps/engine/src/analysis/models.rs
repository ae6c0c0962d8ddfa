use serde::{Deserialize, Serialize};

use crate::analysis::education::Education;
use crate::analysis::scoring::CategoryScores;

/// Score a category needs to count as a strength.
pub const STRENGTH_THRESHOLD: u32 = 70;

/// Complete outcome of analysing one transcript. Never mutated once built;
/// a new analysis produces a new value.
///
/// Field names serialize in camelCase so the same JSON can be stored and
/// read back by browser-side code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub skills: Vec<String>,
    pub skills_score: u32,
    pub experience_years: u32,
    pub experience_score: u32,
    pub education: Education,
    pub education_score: u32,
    pub format_score: u32,
    pub has_email: bool,
    pub has_phone: bool,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn category_scores(&self) -> CategoryScores {
        CategoryScores {
            skills: self.skills_score,
            experience: self.experience_score,
            education: self.education_score,
            format: self.format_score,
        }
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    /// Number of category scores at or above 70.
    pub fn strengths(&self) -> usize {
        self.category_scores().count_at_least(STRENGTH_THRESHOLD)
    }

    pub fn areas_to_improve(&self) -> usize {
        4 - self.strengths()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Coarse verdict on the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your CV is well-structured and comprehensive",
            ScoreBand::Good => "Good CV with room for improvement in some areas",
            ScoreBand::NeedsImprovement => "Your CV needs significant improvements to stand out",
        }
    }
}
