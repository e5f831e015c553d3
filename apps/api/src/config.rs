use anyhow::{Context, Result};

use crate::session::DEFAULT_MAX_SESSIONS;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on multipart request bodies (resume uploads).
    pub max_upload_bytes: usize,
    /// Live sessions kept in memory before the oldest is evicted.
    pub max_sessions: usize,
    /// Outbound model call timeout. `None` leaves the transport default in place.
    pub llm_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            max_sessions: match std::env::var("MAX_SESSIONS") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_SESSIONS must be a whole number")?,
                Err(_) => DEFAULT_MAX_SESSIONS,
            },
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    /// Config used by handler tests; never touches the process environment.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            llm_timeout_secs: None,
        }
    }
}
