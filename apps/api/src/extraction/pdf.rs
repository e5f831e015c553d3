use super::{join_segments, DocumentKind, ExtractionError};

/// Extracts the text layer of every page, in page order.
/// Image-only pages contribute an empty segment; there is no OCR fallback.
///
/// pdf-extract prefixes each page with its own line breaks, so those are
/// trimmed before the pages are joined.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes).map_err(|e| {
        ExtractionError::DocumentParse {
            kind: DocumentKind::Pdf,
            reason: e.to_string(),
        }
    })?;

    tracing::debug!("PDF decoded: {} pages", pages.len());
    Ok(join_segments(pages.iter().map(|page| page.trim_matches('\n'))))
}
