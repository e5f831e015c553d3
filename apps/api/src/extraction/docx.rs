use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use super::{join_segments, DocumentKind, ExtractionError};

/// Extracts the text of every body paragraph, in document order.
/// Tables, headers, and footers are not visited.
pub fn extract_docx_text(docx_bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(docx_bytes).map_err(|e| ExtractionError::DocumentParse {
        kind: DocumentKind::Docx,
        reason: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();

    tracing::debug!("DOCX decoded: {} paragraphs", paragraphs.len());
    Ok(join_segments(paragraphs))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}

/// Packs a DOCX with one paragraph per entry, each made of the given runs.
#[cfg(test)]
pub(crate) fn make_test_docx(paragraphs: &[&[&str]]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for runs in paragraphs {
        let mut paragraph = Paragraph::new();
        for run in *runs {
            paragraph = paragraph.add_run(Run::new().add_text(*run));
        }
        docx = docx.add_paragraph(paragraph);
    }

    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_paragraph() {
        let bytes = make_test_docx(&[
            &["Jane Doe"],
            &["Senior Rust Engineer"],
            &["Skills: Rust, Tokio, Postgres"],
        ]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(
            text,
            "Jane Doe\nSenior Rust Engineer\nSkills: Rust, Tokio, Postgres\n"
        );
    }

    #[test]
    fn test_runs_are_concatenated_within_a_paragraph() {
        let bytes = make_test_docx(&[&["Built ", "a message broker", " in Rust"]]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Built a message broker in Rust\n");
    }

    #[test]
    fn test_empty_paragraph_keeps_its_line() {
        let bytes = make_test_docx(&[&["Experience"], &[], &["Education"]]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Experience\n\nEducation\n");
    }

    #[test]
    fn test_tabs_breaks_and_hyperlinks() {
        use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run};

        let paragraph = Paragraph::new()
            .add_run(
                Run::new()
                    .add_text("A")
                    .add_tab()
                    .add_text("B")
                    .add_break(BreakType::TextWrapping)
                    .add_text("C"),
            )
            .add_hyperlink(
                Hyperlink::new("https://example.com", HyperlinkType::External)
                    .add_run(Run::new().add_text(" link")),
            );

        let mut cursor = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(paragraph)
            .build()
            .pack(&mut cursor)
            .unwrap();

        let text = extract_docx_text(&cursor.into_inner()).unwrap();
        assert_eq!(text, "A\tB\nC link\n");
    }

    #[test]
    fn test_corrupt_docx_returns_parse_error() {
        let err = extract_docx_text(b"PK\x03\x04 truncated").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse docx document"));
    }
}
