//! CV analysis engine.
//!
//! Turns an uploaded CV into a plain-text transcript, scores it on skills,
//! experience, education and format, and feeds the detected skills to the
//! job matcher and the learning center. Hosts build an [`EngineState`] once
//! and call [`analyze_document`]; readers pick the latest result up from the
//! shared [`AnalysisStore`].

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod jobs;
pub mod learning;
pub mod pipeline;
pub mod state;
pub mod telemetry;

pub use analysis::{analyze_transcript, AnalysisResult, ScoreBand, SkillCatalog, SkillCatalogKind};
pub use config::EngineConfig;
pub use errors::EngineError;
pub use extraction::{Document, DocumentExtractor, DocumentKind, PdfTextExtractor};
pub use pipeline::{analyze_document, job_board, learning_plan, JobBoard};
pub use state::{AnalysisSnapshot, AnalysisStore, EngineState};
