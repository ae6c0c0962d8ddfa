//! Job matcher: scores job skill requirements against a candidate's skills.
//!
//! Algorithm:
//! 1. matched = job skills present in the candidate list (case-insensitive)
//! 2. match_percentage = round(|matched| / |job skills| × 100)
//! 3. An empty candidate list scores 0 for every job.
//!
//! The denominator is always the job's skill count, never the candidate's.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::jobs::models::{Job, JobMatch, MatchLevel};

/// Which job cards to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl MatchFilter {
    fn accepts(&self, level: MatchLevel) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::High => level == MatchLevel::High,
            MatchFilter::Medium => level == MatchLevel::Medium,
            MatchFilter::Low => level == MatchLevel::Low,
        }
    }
}

/// Notification payload raised when at least one job is a high match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighMatchAlert {
    pub title: String,
    pub body: String,
    pub tag: String,
    pub job_ids: Vec<String>,
}

pub const HIGH_MATCH_ALERT_TAG: &str = "high-match-jobs";

fn candidate_has(candidate_skills: &[String], skill: &str) -> bool {
    candidate_skills
        .iter()
        .any(|c| c.to_lowercase() == skill.to_lowercase())
}

/// Job skills the candidate has, in job order.
pub fn matched_skills(job: &Job, candidate_skills: &[String]) -> Vec<String> {
    job.skills
        .iter()
        .filter(|skill| candidate_has(candidate_skills, skill))
        .cloned()
        .collect()
}

/// Job skills the candidate lacks, in job order.
pub fn missing_skills(job: &Job, candidate_skills: &[String]) -> Vec<String> {
    job.skills
        .iter()
        .filter(|skill| !candidate_has(candidate_skills, skill))
        .cloned()
        .collect()
}

pub fn match_percentage(job: &Job, candidate_skills: &[String]) -> u32 {
    if candidate_skills.is_empty() || job.skills.is_empty() {
        return 0;
    }
    let matched = matched_skills(job, candidate_skills).len();
    percentage(matched, job.skills.len())
}

fn percentage(part: usize, total: usize) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}

pub fn match_job<'a>(job: &'a Job, candidate_skills: &[String]) -> JobMatch<'a> {
    JobMatch {
        job,
        match_percentage: match_percentage(job, candidate_skills),
        matched_skills: matched_skills(job, candidate_skills),
        missing_skills: missing_skills(job, candidate_skills),
    }
}

/// Scores every job in catalog order.
pub fn match_jobs<'a>(jobs: &'a [Job], candidate_skills: &[String]) -> Vec<JobMatch<'a>> {
    jobs.iter()
        .map(|job| match_job(job, candidate_skills))
        .collect()
}

/// Applies a level filter. Without candidate skills there is nothing to
/// filter on, so every job is kept.
pub fn filter_by_level<'a>(
    matches: Vec<JobMatch<'a>>,
    filter: MatchFilter,
    has_candidate_skills: bool,
) -> Vec<JobMatch<'a>> {
    if !has_candidate_skills {
        return matches;
    }
    matches
        .into_iter()
        .filter(|m| filter.accepts(m.level()))
        .collect()
}

/// Builds the high-match notification, if any job reaches the high level.
pub fn high_match_alert(matches: &[JobMatch<'_>]) -> Option<HighMatchAlert> {
    let job_ids: Vec<String> = matches
        .iter()
        .filter(|m| m.level() == MatchLevel::High)
        .map(|m| m.job.id.clone())
        .collect();

    if job_ids.is_empty() {
        return None;
    }

    let count = job_ids.len();
    let noun = if count > 1 { "jobs" } else { "job" };
    info!(count, "High-match jobs found");

    Some(HighMatchAlert {
        title: "High Match Jobs Found!".to_string(),
        body: format!(
            "{count} {noun} match your CV with {}%+ compatibility",
            MatchLevel::HIGH_MIN
        ),
        tag: HIGH_MATCH_ALERT_TAG.to_string(),
        job_ids,
    })
}

/// Union of missing skills across matches, first-seen order, lowercased.
pub fn missing_skills_across(matches: &[JobMatch<'_>]) -> Vec<String> {
    let mut union: Vec<String> = Vec::new();
    for skill in matches.iter().flat_map(|m| m.missing_skills.iter()) {
        let lower = skill.to_lowercase();
        if !union.contains(&lower) {
            union.push(lower);
        }
    }
    union
}
