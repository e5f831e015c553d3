use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Default: `LlmClient` (Gemini).
    pub generator: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
    pub config: Config,
}
