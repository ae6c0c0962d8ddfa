//! PDF text extraction on the blocking pool.
//!
//! `pdf-extract` is synchronous and can panic on malformed input, so parsing
//! runs inside `tokio::task::spawn_blocking`; a panic surfaces as a
//! `JoinError` and is reported like any other parse failure.

use bytes::Bytes;

/// Extracts the pages of a PDF, in order, as one string per page.
pub async fn extract_pages(bytes: Bytes) -> Result<Vec<String>, String> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&bytes))
        .await
        .map_err(|e| format!("PDF parser aborted: {e}"))?
        .map_err(|e| format!("PDF parse failed: {e}"))
}

/// Joins a page's text items with single spaces and terminates every page with
/// a newline: "page one\npage two\n".
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut transcript = String::new();
    for page in pages {
        let items: Vec<&str> = page.as_ref().split_whitespace().collect();
        transcript.push_str(&items.join(" "));
        transcript.push('\n');
    }
    transcript
}

/// Minimal PDF with one Helvetica text line per page, xref offsets included.
#[cfg(test)]
pub(crate) fn sample_pdf(pages: &[&str]) -> Vec<u8> {
    let font_id = 3 + 2 * pages.len();
    let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
    ];
    for (i, text) in pages.iter().enumerate() {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {} 0 R >>",
            4 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
