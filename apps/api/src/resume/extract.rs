//! Text extraction adapter for uploaded résumés.
//!
//! Extraction never fails from the caller's point of view: anything that
//! cannot be read becomes an empty string, which the scorer grades as the
//! documented zero case.

use bytes::Bytes;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracts plain text from an uploaded file. Blocking; PDF parsing is CPU-bound.
pub fn extract_text(bytes: &[u8], content_type: Option<&str>) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if is_pdf(bytes, content_type) {
        return match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => {
                debug!("extracted {} chars from PDF", text.len());
                text
            }
            Err(e) => {
                warn!("PDF extraction failed, scoring as empty: {e}");
                String::new()
            }
        };
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!(
                "unsupported upload (content type {:?}), scoring as empty",
                content_type
            );
            String::new()
        }
    }
}

/// Runs [`extract_text`] on the blocking pool. A panic inside the PDF parser
/// is treated like any other extraction failure.
pub async fn extract_text_blocking(bytes: Bytes, content_type: Option<String>) -> String {
    tokio::task::spawn_blocking(move || extract_text(&bytes, content_type.as_deref()))
        .await
        .unwrap_or_else(|e| {
            warn!("text extraction aborted, scoring as empty: {e}");
            String::new()
        })
}

fn is_pdf(bytes: &[u8], content_type: Option<&str>) -> bool {
    bytes.starts_with(PDF_MAGIC)
        || content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"))
}
