use thiserror::Error;

/// Engine-level error type.
///
/// Only the edges of the engine are fallible: upload validation, filesystem
/// reads, configuration and (de)serialization. Extraction failures never show
/// up here; they degrade to a sentinel transcript instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Stable machine-readable code, for hosts that surface errors to a UI.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            EngineError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            EngineError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "IO_ERROR"
            }
            EngineError::Serialization(_) => "SERIALIZATION_ERROR",
            EngineError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// True for errors caused by the uploaded file itself rather than the engine.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::UnsupportedFileType(_) | EngineError::FileTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            EngineError::UnsupportedFileType("image/png".into()).code(),
            "UNSUPPORTED_FILE_TYPE"
        );
        assert_eq!(
            EngineError::FileTooLarge { size: 11, limit: 10 }.code(),
            "FILE_TOO_LARGE"
        );
        assert_eq!(EngineError::Config("x".into()).code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_rejections_are_upload_errors_only() {
        assert!(EngineError::FileTooLarge { size: 2, limit: 1 }.is_rejection());
        assert!(!EngineError::Config("bad".into()).is_rejection());
    }

    #[test]
    fn test_display_includes_sizes() {
        let err = EngineError::FileTooLarge {
            size: 20,
            limit: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("10"));
    }
}
