use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::normalizer::NormalizeError;
use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant ends one analysis run; none of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Generative text service error: {0}")]
    ServiceCall(#[from] LlmError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DOCUMENT_PARSE_ERROR",
                    e.to_string(),
                )
            }
            AppError::ServiceCall(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, "SERVICE_CALL_ERROR", self.to_string())
            }
            AppError::Normalize(e) => {
                tracing::error!("Normalize error: {} (raw {} bytes)", e.reason, e.raw.len());
                let body = Json(json!({
                    "error": {
                        "code": "NORMALIZE_ERROR",
                        "message": e.to_string(),
                        "raw": e.raw
                    }
                }));
                return (StatusCode::BAD_GATEWAY, body).into_response();
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;
    use crate::extraction::DocumentKind;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        (parts.status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_normalize_error_exposes_raw_text() {
        let err = crate::evaluation::normalizer::normalize("not json").unwrap_err();
        let (status, json) = body_json(AppError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "NORMALIZE_ERROR");
        assert_eq!(json["error"]["raw"], "not json");
    }

    #[tokio::test]
    async fn test_parse_error_is_unprocessable() {
        let err = ExtractionError::DocumentParse {
            kind: DocumentKind::Pdf,
            reason: "invalid file header".to_string(),
        };
        let (status, json) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["code"], "DOCUMENT_PARSE_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Failed to parse pdf document: invalid file header"
        );
    }

    #[tokio::test]
    async fn test_service_error_carries_provider_message() {
        let err = LlmError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        let (status, json) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "SERVICE_CALL_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Resource has been exhausted"));
    }

    #[tokio::test]
    async fn test_payload_too_large() {
        let err = AppError::PayloadTooLarge("Uploaded file is too large".to_string());
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(json["error"]["message"], "Uploaded file is too large");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, json) = body_json(anyhow::anyhow!("secret detail").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["message"], "An internal server error occurred");
    }
}
