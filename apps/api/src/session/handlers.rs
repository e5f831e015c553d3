use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::analyzer::{run_analysis, Analysis};
use crate::evaluation::handlers::read_analyze_form;
use crate::session::{session_not_found, AnalysisSession};
use crate::state::AppState;

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<AnalysisSession>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AnalysisSession>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(session))
}

/// POST /api/v1/sessions/:id/analyze
///
/// Runs an analysis and installs it as the session's latest result.
/// On failure the previous result stays in place.
pub async fn handle_session_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<Analysis>, AppError> {
    if state.sessions.get(session_id).await.is_none() {
        return Err(session_not_found(session_id));
    }

    let mut form = read_analyze_form(multipart).await?;
    let document = form.require_resume()?;

    let analysis = run_analysis(
        document,
        &form.job_description,
        state.generator.as_ref(),
        form.show_charts,
    )
    .await?;

    state
        .sessions
        .install(session_id, analysis.clone())
        .await?;
    Ok(Json(analysis))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(session_id))
    }
}
