use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// An uploaded document as handed over by the upload UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a document from disk. The name is the path's file name.
    pub async fn from_path(path: &Path, mime_type: &str) -> Result<Self, EngineError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name_of(path), mime_type, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::detect(&self.name, &self.mime_type)
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// How a document's text is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
    /// doc/docx: accepted, but only a placeholder transcript is produced.
    WordProcessor,
}

impl DocumentKind {
    /// Classifies by mime type first, then by file extension.
    pub fn detect(name: &str, mime_type: &str) -> Self {
        let mime = mime_type.to_lowercase();
        let extension = extension_of(name);

        if mime.contains("pdf") || extension.as_deref() == Some("pdf") {
            DocumentKind::Pdf
        } else if mime.contains("text") || extension.as_deref() == Some("txt") {
            DocumentKind::PlainText
        } else {
            DocumentKind::WordProcessor
        }
    }
}

pub(crate) fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
