//! Document text extraction: turns an uploaded resume (PDF or DOCX) into plain text.
//!
//! The output is a lossy reduction: one newline-terminated segment per PDF page or
//! DOCX paragraph, with no page numbers, styling, or table structure preserved.
//! Decoding is CPU-bound and runs inside `tokio::task::spawn_blocking`.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to parse {kind} document: {reason}")]
    DocumentParse { kind: DocumentKind, reason: String },
}

/// Declared format of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a file extension (without the dot) to a kind, case-insensitively.
    /// Legacy `.doc` is routed to the DOCX reader.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" | "doc" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => f.write_str("pdf"),
            DocumentKind::Docx => f.write_str("docx"),
        }
    }
}

/// An uploaded resume. Consumed once by extraction, then dropped.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub kind: Option<DocumentKind>,
    pub bytes: Bytes,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, bytes: Bytes) -> Self {
        let file_name = file_name.into();
        let kind = DocumentKind::from_file_name(&file_name);
        Self {
            file_name,
            kind,
            bytes,
        }
    }
}

/// Extracts plain text from `bytes` according to `kind`.
///
/// An unknown kind is not an error: it yields an empty string so the caller can
/// decide what an empty extraction means.
pub fn extract_text(bytes: &[u8], kind: Option<DocumentKind>) -> Result<String, ExtractionError> {
    match kind {
        Some(DocumentKind::Pdf) => pdf::extract_pdf_text(bytes),
        Some(DocumentKind::Docx) => docx::extract_docx_text(bytes),
        None => {
            debug!("Unsupported document kind, returning empty text");
            Ok(String::new())
        }
    }
}

/// Runs [`extract_text`] on the blocking pool.
///
/// A decoder that panics on hostile input surfaces here as a join error and is
/// reported as a parse failure for that document only.
pub async fn extract_document(document: ResumeDocument) -> Result<String, ExtractionError> {
    let Some(kind) = document.kind else {
        debug!(
            "No extractor for '{}', returning empty text",
            document.file_name
        );
        return Ok(String::new());
    };

    let bytes = document.bytes;
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || extract_text(&bytes, Some(kind)))
        .await
        .map_err(|e| ExtractionError::DocumentParse {
            kind,
            reason: format!("decoder aborted: {e}"),
        })??;

    info!(
        "Extracted {} chars from {} ({} bytes, {kind})",
        text.chars().count(),
        document.file_name,
        size
    );
    Ok(text)
}

/// Concatenates fragments, terminating every one (including the last) with `\n`.
pub(crate) fn join_segments<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for segment in segments {
        text.push_str(segment.as_ref());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(
            DocumentKind::from_file_name("jane_doe.pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_file_name("Jane Doe CV.DOCX"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(
            DocumentKind::from_file_name("legacy.doc"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_file_name("notes.txt"), None);
        assert_eq!(DocumentKind::from_file_name("resume"), None);
        assert_eq!(DocumentKind::from_file_name(""), None);
    }

    #[test]
    fn test_unknown_kind_yields_empty_text() {
        let text = extract_text(b"%PDF-1.4 looks like a pdf", None).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_join_segments_terminates_every_segment() {
        assert_eq!(join_segments(["page one", "page two"]), "page one\npage two\n");
        assert_eq!(join_segments(["", "second"]), "\nsecond\n");
        assert_eq!(join_segments(Vec::<String>::new()), "");
    }

    #[test]
    fn test_parse_error_names_the_kind() {
        let err = ExtractionError::DocumentParse {
            kind: DocumentKind::Docx,
            reason: "invalid zip header".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse docx document: invalid zip header"
        );
    }

    #[tokio::test]
    async fn test_extract_document_unsupported_file_is_empty() {
        let document = ResumeDocument::new("resume.rtf", Bytes::from_static(b"{\\rtf1 hello}"));
        assert_eq!(document.kind, None);
        let text = extract_document(document).await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_extract_document_corrupt_docx_fails() {
        let document = ResumeDocument::new("resume.docx", Bytes::from_static(b"not a zip archive"));
        let err = extract_document(document).await.unwrap_err();
        let ExtractionError::DocumentParse { kind, .. } = err;
        assert_eq!(kind, DocumentKind::Docx);
    }
}
