//! Text extraction. Turns an uploaded document into a plain-text transcript.
//!
//! Extraction never fails from the caller's point of view. Unreadable PDFs and
//! unreadable files degrade to a fixed sentinel transcript, which then scores
//! low instead of aborting the analysis.
//!
//! `EngineState` holds an `Arc<dyn DocumentExtractor>`, so a host can swap in
//! another backend (e.g. a real docx parser) without touching the pipeline.

pub mod models;
pub mod pdf;
pub mod validation;

use std::path::Path;

use async_trait::async_trait;
use tracing::{info, warn};

pub use models::{Document, DocumentKind};
pub use validation::{format_file_size, validate_upload};

pub const PDF_ERROR_TRANSCRIPT: &str = "Error extracting text from PDF. Please try a different file.";
pub const TEXT_ERROR_TRANSCRIPT: &str = "Error reading text file.";

/// Placeholder transcript for word-processor formats, which are accepted but
/// not parsed.
pub fn placeholder_transcript(file_name: &str) -> String {
    format!("Sample CV content extracted from {file_name}")
}

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, document: &Document) -> String;
}

/// Default extractor: `pdf-extract` for PDFs, UTF-8 decoding for text files,
/// placeholder for everything else.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    async fn extract(&self, document: &Document) -> String {
        match document.kind() {
            DocumentKind::Pdf => match pdf::extract_pages(document.bytes.clone()).await {
                Ok(pages) => {
                    info!(file = %document.name, pages = pages.len(), "PDF text extracted");
                    pdf::join_pages(&pages)
                }
                Err(e) => {
                    warn!(file = %document.name, "Error extracting PDF text: {e}");
                    PDF_ERROR_TRANSCRIPT.to_string()
                }
            },
            DocumentKind::PlainText => {
                info!(file = %document.name, bytes = document.bytes.len(), "Text file read");
                String::from_utf8_lossy(&document.bytes).into_owned()
            }
            DocumentKind::WordProcessor => {
                info!(
                    file = %document.name,
                    "doc/docx parsing is a placeholder; no text extracted"
                );
                placeholder_transcript(&document.name)
            }
        }
    }
}

/// Reads `path` and extracts it. A read failure yields the sentinel for the
/// file's kind rather than an error.
pub async fn extract_from_path(
    extractor: &dyn DocumentExtractor,
    path: &Path,
    mime_type: &str,
) -> String {
    match Document::from_path(path, mime_type).await {
        Ok(document) => extractor.extract(&document).await,
        Err(e) => {
            let name = models::file_name_of(path);
            warn!(file = %name, "Error reading file: {e}");
            match DocumentKind::detect(&name, mime_type) {
                DocumentKind::Pdf => PDF_ERROR_TRANSCRIPT.to_string(),
                DocumentKind::PlainText => TEXT_ERROR_TRANSCRIPT.to_string(),
                DocumentKind::WordProcessor => placeholder_transcript(&name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_is_verbatim() {
        let doc = Document::new("cv.txt", "text/plain", "Jane Doe\n  Rust, SQL\n");
        assert_eq!(PdfTextExtractor.extract(&doc).await, "Jane Doe\n  Rust, SQL\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_rejected() {
        let doc = Document::new("cv.txt", "text/plain", vec![b'o', b'k', 0xff]);
        assert_eq!(PdfTextExtractor.extract(&doc).await, "ok\u{fffd}");
    }

    #[tokio::test]
    async fn test_word_documents_get_placeholder() {
        let doc = Document::new("resume.docx", "", vec![0u8; 16]);
        assert_eq!(
            PdfTextExtractor.extract(&doc).await,
            "Sample CV content extracted from resume.docx"
        );
    }

    #[tokio::test]
    async fn test_pdf_pages_are_joined_in_order() {
        let bytes = pdf::sample_pdf(&["python docker", "5 years experience"]);
        let doc = Document::new("cv.pdf", "application/pdf", bytes);
        assert_eq!(
            PdfTextExtractor.extract(&doc).await,
            "python docker\n5 years experience\n"
        );
    }

    #[tokio::test]
    async fn test_corrupt_pdf_yields_sentinel() {
        let doc = Document::new("cv.pdf", "application/pdf", "%PDF-1.4 truncated garbage");
        assert_eq!(PdfTextExtractor.extract(&doc).await, PDF_ERROR_TRANSCRIPT);
    }

    #[tokio::test]
    async fn test_extract_from_path_reads_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        tokio::fs::write(&path, "5 years experience").await.unwrap();

        let transcript = extract_from_path(&PdfTextExtractor, &path, "text/plain").await;
        assert_eq!(transcript, "5 years experience");
    }

    #[tokio::test]
    async fn test_extract_from_missing_path_degrades_to_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let missing_txt = dir.path().join("gone.txt");
        let missing_pdf = dir.path().join("gone.pdf");

        assert_eq!(
            extract_from_path(&PdfTextExtractor, &missing_txt, "").await,
            TEXT_ERROR_TRANSCRIPT
        );
        assert_eq!(
            extract_from_path(&PdfTextExtractor, &missing_pdf, "").await,
            PDF_ERROR_TRANSCRIPT
        );
    }
}
