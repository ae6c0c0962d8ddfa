//! Upload gate: accepted file types, size limit and size formatting.

use crate::errors::EngineError;
use crate::extraction::models::extension_of;

pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Accepts a file when either its mime type or its extension is supported,
/// and its size does not exceed `max_bytes`.
pub fn validate_upload(name: &str, mime_type: &str, size: u64, max_bytes: u64) -> Result<(), EngineError> {
    let mime_ok = ACCEPTED_MIME_TYPES.contains(&mime_type);
    let extension_ok = extension_of(name)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);

    if !mime_ok && !extension_ok {
        let shown = if mime_type.is_empty() { name } else { mime_type };
        return Err(EngineError::UnsupportedFileType(shown.to_string()));
    }

    if size > max_bytes {
        return Err(EngineError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    Ok(())
}

/// Human-readable size: "0 Bytes", "512 Bytes", "1.5 KB", "2 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
