// CV analysis: feature detectors, weighted scoring and recommendations.
// Every function here is pure and total over any input string.

pub mod contact;
pub mod education;
pub mod experience;
pub mod models;
pub mod recommendations;
pub mod scoring;
pub mod skills;

use chrono::{Datelike, Utc};
use tracing::debug;

pub use contact::{detect_contact, ContactSignals};
pub use education::{detect_education, Education};
pub use experience::{detect_experience_years, detect_experience_years_at};
pub use models::{AnalysisResult, ScoreBand};
pub use recommendations::generate_recommendations;
pub use scoring::CategoryScores;
pub use skills::{SkillCatalog, SkillCatalogKind};

/// Analyses a transcript against `catalog`, dating open-ended ranges to today.
pub fn analyze_transcript(text: &str, catalog: &SkillCatalog) -> AnalysisResult {
    analyze_transcript_at(text, catalog, Utc::now().year())
}

/// Same as [`analyze_transcript`] with an explicit reference year for
/// "present"/"current" date ranges.
pub fn analyze_transcript_at(text: &str, catalog: &SkillCatalog, current_year: i32) -> AnalysisResult {
    let skills = catalog.detect(text);
    let experience_years = detect_experience_years_at(text, current_year);
    let education = detect_education(text);
    let contact = detect_contact(text);

    let scores = CategoryScores::compute(
        skills.len(),
        experience_years,
        &education,
        contact,
        text.chars().count(),
    );
    let recommendations = generate_recommendations(&skills, experience_years, &education, contact);

    debug!(
        skills = skills.len(),
        experience_years,
        education_level = education.level,
        overall = scores.overall(),
        "Transcript analysed"
    );

    AnalysisResult {
        overall_score: scores.overall(),
        skills,
        skills_score: scores.skills,
        experience_years,
        experience_score: scores.experience,
        education,
        education_score: scores.education,
        format_score: scores.format,
        has_email: contact.has_email,
        has_phone: contact.has_phone,
        recommendations,
    }
}
