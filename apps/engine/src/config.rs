use anyhow::{anyhow, bail, Context, Result};

use crate::analysis::skills::SkillCatalogKind;

/// Largest upload the engine accepts by default (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Engine configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub max_upload_bytes: u64,
    pub skill_catalog: SkillCatalogKind,
    pub rust_log: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            skill_catalog: SkillCatalogKind::Standard,
            rust_log: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` is this over
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_upload_bytes = match lookup("CV_MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("CV_MAX_UPLOAD_BYTES must be a positive byte count")?,
            None => defaults.max_upload_bytes,
        };
        if max_upload_bytes == 0 {
            bail!("CV_MAX_UPLOAD_BYTES must be greater than zero");
        }

        let skill_catalog = match lookup("CV_SKILL_CATALOG") {
            Some(raw) => raw
                .parse::<SkillCatalogKind>()
                .map_err(|e| anyhow!("Invalid CV_SKILL_CATALOG value '{raw}': {e}"))?,
            None => defaults.skill_catalog,
        };

        Ok(EngineConfig {
            max_upload_bytes,
            skill_catalog,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
