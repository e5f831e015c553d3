//! Axum route handlers for extraction and stateless analysis.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::evaluation::analyzer::{run_analysis, Analysis};
use crate::extraction::{extract_document, DocumentKind, ResumeDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Multipart form
// ────────────────────────────────────────────────────────────────────────────

/// Fields accepted by the analysis endpoints.
///
/// - `resume`: file part; its file name decides the document kind
/// - `job_description`: text
/// - `show_charts`: optional flag, defaults to true
#[derive(Debug)]
pub struct AnalyzeForm {
    pub resume: Option<ResumeDocument>,
    pub job_description: String,
    pub show_charts: bool,
}

impl AnalyzeForm {
    pub fn require_resume(&mut self) -> Result<ResumeDocument, AppError> {
        self.resume
            .take()
            .ok_or_else(|| AppError::Validation("resume file is required".to_string()))
    }
}

pub async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm {
        resume: None,
        job_description: String::new(),
        show_charts: true,
    };

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                form.resume = Some(ResumeDocument::new(file_name, data));
            }
            "job_description" => {
                form.job_description = field.text().await.map_err(multipart_error)?;
            }
            "show_charts" => {
                let raw = field.text().await.map_err(multipart_error)?;
                form.show_charts = parse_flag(&raw)?;
            }
            _ => {
                // Drain unknown parts so the stream can advance.
                field.bytes().await.map_err(multipart_error)?;
            }
        }
    }

    Ok(form)
}

fn parse_flag(raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        other => Err(AppError::Validation(format!(
            "show_charts must be true or false, got '{other}'"
        ))),
    }
}

/// Keeps the body-limit rejection distinct from malformed input.
fn multipart_error(e: MultipartError) -> AppError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge("Uploaded file is too large".to_string())
        }
        _ => AppError::Validation(format!("Invalid multipart body: {e}")),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub document_kind: Option<DocumentKind>,
    pub text: String,
    pub chars: usize,
}

/// POST /api/v1/extract
///
/// Returns the text the analyzer would send to the model for this upload.
/// Unsupported file kinds yield empty text, not an error.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut form = read_analyze_form(multipart).await?;
    let document = form.require_resume()?;

    let file_name = document.file_name.clone();
    let document_kind = document.kind;
    let text = extract_document(document).await?;

    Ok(Json(ExtractResponse {
        file_name,
        document_kind,
        chars: text.chars().count(),
        text,
    }))
}

/// POST /api/v1/analyze
///
/// One-shot analysis: nothing is kept after the response is sent.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Analysis>, AppError> {
    let mut form = read_analyze_form(multipart).await?;
    let document = form.require_resume()?;

    let analysis = run_analysis(
        document,
        &form.job_description,
        state.generator.as_ref(),
        form.show_charts,
    )
    .await?;

    Ok(Json(analysis))
}
