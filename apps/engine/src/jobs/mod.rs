// Job board: static catalog, per-job skill matching, match levels and the
// high-match alert. Matches are recomputed for every display and never cached.

pub mod catalog;
pub mod matcher;
pub mod models;

pub use catalog::{find_job, job_catalog};
pub use matcher::{
    filter_by_level, high_match_alert, match_job, match_jobs, match_percentage, matched_skills,
    missing_skills, missing_skills_across, HighMatchAlert, MatchFilter,
};
pub use models::{Job, JobMatch, MatchLevel};
