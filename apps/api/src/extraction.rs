//! Résumé text extraction from uploaded PDF bytes.
//!
//! Extraction never fails the request. Unreadable or text-less PDFs produce
//! empty text which is still scored; the `ExtractionStatus` on the returned
//! document lets callers tell "no résumé content" apart from "no overlap".

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;

/// How the résumé text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// Text was extracted.
    Ok,
    /// The PDF parsed but contained no text (e.g. a scanned image).
    Empty,
    /// The PDF could not be parsed; scored as empty text.
    Unreadable,
}

/// Raw résumé text plus how it was obtained. Lives for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub text: String,
    pub status: ExtractionStatus,
}

impl ResumeDocument {
    /// Wraps already-extracted text, classifying blank text as `Empty`.
    pub fn from_text(text: String) -> Self {
        let status = if text.trim().is_empty() {
            ExtractionStatus::Empty
        } else {
            ExtractionStatus::Ok
        };
        Self { text, status }
    }

    fn unreadable() -> Self {
        Self {
            text: String::new(),
            status: ExtractionStatus::Unreadable,
        }
    }
}

/// Extracts text from a PDF held fully in memory. CPU-bound; see
/// `extract_resume_text_blocking` for use from async code.
///
/// `pdf-extract` can panic on unusual documents, so panics are contained and
/// treated the same as parse errors.
pub fn extract_resume_text(bytes: &[u8]) -> ResumeDocument {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => {
            let document = ResumeDocument::from_text(text);
            debug!(
                "Extracted {} chars from {} byte PDF ({:?})",
                document.text.len(),
                bytes.len(),
                document.status
            );
            document
        }
        Ok(Err(e)) => {
            warn!("PDF text extraction failed, scoring empty resume text: {e}");
            ResumeDocument::unreadable()
        }
        Err(_) => {
            warn!("PDF text extraction panicked, scoring empty resume text");
            ResumeDocument::unreadable()
        }
    }
}

/// Runs `extract_resume_text` on the blocking pool so the executor stays free.
pub async fn extract_resume_text_blocking(bytes: bytes::Bytes) -> Result<ResumeDocument, AppError> {
    tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}")))
}

/// Returns true if the content type or the leading bytes identify a PDF.
/// - Content-Type: application/pdf (case-insensitive, substring match)
/// - Magic bytes: %PDF-
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(b"%PDF-")
}


#[cfg(test)]
mod tests {
    use super::test_support::minimal_pdf;
    use super::*;
    use crate::scoring::KeywordSet;

    #[test]
    fn test_is_pdf_by_content_type() {
        assert!(is_pdf(Some("application/pdf"), b""));
        assert!(is_pdf(Some("Application/PDF; charset=binary"), b""));
    }

    #[test]
    fn test_is_pdf_by_magic_bytes() {
        assert!(is_pdf(None, b"%PDF-1.7\n..."));
        assert!(is_pdf(Some("application/octet-stream"), b"%PDF-1.4"));
    }

    #[test]
    fn test_is_pdf_rejects_other_files() {
        assert!(!is_pdf(Some("text/plain"), b"hello"));
        assert!(!is_pdf(None, b"PK\x03\x04"));
    }

    #[test]
    fn test_from_text_classifies_blank_as_empty() {
        assert_eq!(
            ResumeDocument::from_text("  \n ".to_string()).status,
            ExtractionStatus::Empty
        );
        assert_eq!(
            ResumeDocument::from_text("Rust engineer".to_string()).status,
            ExtractionStatus::Ok
        );
    }

    #[test]
    fn test_text_is_extracted_from_real_pdf() {
        let pdf = minimal_pdf(&["Rust Tokio", "Axum"]);
        assert!(is_pdf(None, &pdf));

        let document = extract_resume_text(&pdf);
        assert_eq!(document.status, ExtractionStatus::Ok);

        let keywords = KeywordSet::from_text(&document.text);
        for word in ["rust", "tokio", "axum"] {
            assert!(keywords.contains(word), "{word} missing from {:?}", document.text);
        }
    }

    #[test]
    fn test_pdf_without_text_is_empty() {
        let document = extract_resume_text(&minimal_pdf(&[]));
        assert_eq!(document.status, ExtractionStatus::Empty);
    }

    #[test]
    fn test_garbage_bytes_are_unreadable_not_fatal() {
        let document = extract_resume_text(b"%PDF-1.4 this is not really a pdf");
        assert_eq!(document.status, ExtractionStatus::Unreadable);
        assert!(document.text.is_empty());
    }

    #[test]
    fn test_empty_bytes_are_unreadable() {
        let document = extract_resume_text(b"");
        assert_eq!(document.status, ExtractionStatus::Unreadable);
    }

    #[tokio::test]
    async fn test_blocking_wrapper_returns_document() {
        let document = extract_resume_text_blocking(bytes::Bytes::from_static(b"not a pdf"))
            .await
            .unwrap();
        assert_eq!(document.status, ExtractionStatus::Unreadable);
    }
}
