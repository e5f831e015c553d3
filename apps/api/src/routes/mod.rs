pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless API
        .route("/api/v1/extract", post(handlers::handle_extract))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        // Session API
        .route("/api/v1/sessions", post(session_handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session_handlers::handle_get_session)
                .delete(session_handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/analyze",
            post(session_handlers::handle_session_analyze),
        )
        .layer(body_limit)
        .with_state(state)
}
