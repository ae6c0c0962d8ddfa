use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

use crate::analysis::{AnalysisResult, SkillCatalog};
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::extraction::{DocumentExtractor, PdfTextExtractor};

/// One published analysis. Replaced as a unit; never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub id: Uuid,
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

impl AnalysisSnapshot {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Latest analysis, single writer / many readers.
///
/// Backed by a `watch` channel holding an `Arc`: publishing swaps the whole
/// snapshot, so a reader sees either the previous complete result or the new
/// one. Cloning the store shares the same channel.
#[derive(Clone)]
pub struct AnalysisStore {
    tx: Arc<watch::Sender<Option<Arc<AnalysisSnapshot>>>>,
}

impl Default for AnalysisStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn publish(&self, file_name: &str, result: AnalysisResult) -> Arc<AnalysisSnapshot> {
        let snapshot = Arc::new(AnalysisSnapshot {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            analyzed_at: Utc::now(),
            result,
        });
        info!(
            analysis_id = %snapshot.id,
            file = %snapshot.file_name,
            overall_score = snapshot.result.overall_score,
            "Analysis published"
        );
        self.tx.send_replace(Some(Arc::clone(&snapshot)));
        snapshot
    }

    pub fn latest(&self) -> Option<Arc<AnalysisSnapshot>> {
        self.tx.borrow().clone()
    }

    /// Skills of the latest analysis, or none before the first publish.
    pub fn current_skills(&self) -> Vec<String> {
        self.latest()
            .map(|s| s.result.skills.clone())
            .unwrap_or_default()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<AnalysisSnapshot>>> {
        self.tx.subscribe()
    }

    pub fn clear(&self) {
        self.tx.send_replace(None);
    }
}

/// Shared engine state handed to the pipeline.
#[derive(Clone)]
pub struct EngineState {
    pub config: EngineConfig,
    /// Pluggable extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
    pub skill_catalog: &'static SkillCatalog,
    pub store: AnalysisStore,
}

impl EngineState {
    pub fn new(config: EngineConfig) -> Self {
        let skill_catalog = config.skill_catalog.catalog();
        info!(
            catalog = %config.skill_catalog,
            skills = skill_catalog.len(),
            max_upload_bytes = config.max_upload_bytes,
            "Engine state initialized"
        );
        Self {
            config,
            extractor: Arc::new(PdfTextExtractor),
            skill_catalog,
            store: AnalysisStore::new(),
        }
    }

    /// Loads [`EngineConfig`] from the environment and builds the state.
    pub fn from_env() -> Result<Self, EngineError> {
        let config = EngineConfig::from_env().map_err(|e| EngineError::Config(format!("{e:#}")))?;
        Ok(Self::new(config))
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}
