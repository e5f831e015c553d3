//! Response Normalizer: turns raw model output into a typed `EvaluationResult`.
//!
//! Models often wrap JSON in markdown fences despite being told not to, sometimes
//! more than once. Every fence token is removed wherever it appears, then the
//! remainder must deserialize into the full schema and pass range checks.

use thiserror::Error;

use crate::evaluation::models::EvaluationResult;

const FENCE: &str = "```";

/// The model's reply could not be turned into an `EvaluationResult`.
/// `raw` is the reply exactly as received, kept for diagnosis.
#[derive(Debug, Clone, Error)]
#[error("Failed to parse AI response: {reason}")]
pub struct NormalizeError {
    pub reason: String,
    pub raw: String,
}

impl NormalizeError {
    fn new(reason: impl Into<String>, raw: &str) -> Self {
        Self {
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }
}

/// Removes every ``` token (plus a language tag directly after it, e.g. `json`)
/// until none remain, then trims surrounding whitespace. Idempotent.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = text.to_string();
    while let Some(start) = out.find(FENCE) {
        let tag_len: usize = out[start + FENCE.len()..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
            .map(char::len_utf8)
            .sum();
        out.replace_range(start..start + FENCE.len() + tag_len, "");
    }
    out.trim().to_string()
}

/// Parses a raw model response into an `EvaluationResult`.
pub fn normalize(raw: &str) -> Result<EvaluationResult, NormalizeError> {
    let cleaned = strip_code_fences(raw);

    let result: EvaluationResult =
        serde_json::from_str(&cleaned).map_err(|e| NormalizeError::new(e.to_string(), raw))?;

    result
        .validate()
        .map_err(|reason| NormalizeError::new(reason, raw))?;

    Ok(result)
}
