//! Analysis pipeline: validate → extract → analyse → publish, plus the read
//! side consumed by the job board and the learning center.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::analysis::analyze_transcript;
use crate::errors::EngineError;
use crate::extraction::{validate_upload, Document};
use crate::jobs::{
    filter_by_level, high_match_alert, job_catalog, match_jobs, missing_skills_across,
    HighMatchAlert, JobMatch, MatchFilter,
};
use crate::learning::{learning_catalog, recommend_resources, LearningResource};
use crate::state::{AnalysisSnapshot, EngineState};

/// Runs a full analysis of `document` and publishes the result.
///
/// Only upload validation can fail. An unreadable document still produces a
/// (low-scoring) result built from the sentinel transcript.
pub async fn analyze_document(
    state: &EngineState,
    document: Document,
) -> Result<Arc<AnalysisSnapshot>, EngineError> {
    validate_upload(
        &document.name,
        &document.mime_type,
        document.size(),
        state.config.max_upload_bytes,
    )?;

    info!(file = %document.name, kind = ?document.kind(), "Analysing document");
    let transcript = state.extractor.extract(&document).await;
    let result = analyze_transcript(&transcript, state.skill_catalog);

    Ok(state.store.publish(&document.name, result))
}

/// Job cards for the current analysis.
#[derive(Debug, Clone, Serialize)]
pub struct JobBoard<'a> {
    pub matches: Vec<JobMatch<'a>>,
    pub alert: Option<HighMatchAlert>,
}

/// Matches the built-in jobs against the latest published skills. The alert
/// considers only the jobs that survive the filter.
pub fn job_board(state: &EngineState, filter: MatchFilter) -> JobBoard<'static> {
    let skills = state.store.current_skills();
    let matches = filter_by_level(match_jobs(job_catalog(), &skills), filter, !skills.is_empty());
    let alert = if skills.is_empty() {
        None
    } else {
        high_match_alert(&matches)
    };
    JobBoard { matches, alert }
}

/// Learning resources for every skill the built-in jobs need and the latest
/// analysis lacks.
pub fn learning_plan(state: &EngineState) -> Vec<&'static LearningResource> {
    let skills = state.store.current_skills();
    let missing = if skills.is_empty() {
        Vec::new()
    } else {
        missing_skills_across(&match_jobs(job_catalog(), &skills))
    };
    recommend_resources(learning_catalog(), &missing)
}
