//! Analysis pipeline, one run per request.
//!
//! Flow: extract_document → build_prompt → TextGenerator::generate →
//!       normalize → build_scorecard → Analysis.
//!
//! Each run either returns a complete `Analysis` or an error; nothing is
//! retried and no partial result escapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::models::EvaluationResult;
use crate::evaluation::normalizer::normalize;
use crate::evaluation::prompts::build_prompt;
use crate::evaluation::scorecard::{build_scorecard, Scorecard};
use crate::extraction::{extract_document, DocumentKind, ResumeDocument};
use crate::llm_client::TextGenerator;

/// Message shown when an upload produced no usable text.
pub const EMPTY_EXTRACTION_MESSAGE: &str = "Could not extract text from the file.";

/// The outcome of one successful analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub analysis_id: Uuid,
    pub file_name: String,
    pub document_kind: Option<DocumentKind>,
    pub resume_chars: usize,
    pub analyzed_at: DateTime<Utc>,
    pub result: EvaluationResult,
    pub scorecard: Scorecard,
}

/// Runs extraction, the model call, and normalization for one upload.
pub async fn run_analysis(
    document: ResumeDocument,
    job_description: &str,
    generator: &dyn TextGenerator,
    show_charts: bool,
) -> Result<Analysis, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let file_name = document.file_name.clone();
    let document_kind = document.kind;

    // Step 1: Extract resume text
    let resume_text = extract_document(document).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            EMPTY_EXTRACTION_MESSAGE.to_string(),
        ));
    }
    let resume_chars = resume_text.chars().count();

    // Step 2: Call the model
    let prompt = build_prompt(&resume_text, job_description);
    info!(
        "Requesting evaluation for {file_name}: resume={resume_chars} chars, jd={} chars",
        job_description.chars().count()
    );
    let raw = generator.generate(&prompt).await?;

    // Step 3: Normalize
    let result = normalize(&raw)?;
    info!(
        "Evaluation for {file_name}: match_score={}, verdict={:?}",
        result.match_score, result.verdict
    );

    let scorecard = build_scorecard(&result, show_charts);

    Ok(Analysis {
        analysis_id: Uuid::new_v4(),
        file_name,
        document_kind,
        resume_chars,
        analyzed_at: Utc::now(),
        result,
        scorecard,
    })
}
