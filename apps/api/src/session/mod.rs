//! Analysis sessions: the "most recent result" a dashboard tab is looking at.
//!
//! A session holds at most one `Analysis`. A new run replaces it wholesale;
//! a failed run leaves it untouched. Sessions live in memory only and vanish
//! with the process. The store holds at most `capacity` sessions; creating one
//! past that evicts the oldest.

pub mod handlers;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::analyzer::Analysis;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSession {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub latest: Option<Analysis>,
}

pub const DEFAULT_MAX_SESSIONS: usize = 1000;

pub(crate) fn session_not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {session_id} not found"))
}

#[derive(Default)]
struct Sessions {
    by_id: HashMap<Uuid, AnalysisSession>,
    /// Creation order, oldest first.
    order: VecDeque<Uuid>,
}

/// Cloneable handle over the in-memory session map.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Sessions>>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `capacity` is clamped to at least one session.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Sessions::default())),
            capacity: capacity.max(1),
        }
    }

    pub async fn create(&self) -> AnalysisSession {
        let session = AnalysisSession {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            latest: None,
        };

        let mut sessions = self.inner.write().await;
        while sessions.by_id.len() >= self.capacity {
            let Some(oldest) = sessions.order.pop_front() else {
                break;
            };
            sessions.by_id.remove(&oldest);
            warn!("Session {oldest} evicted: store is at capacity ({})", self.capacity);
        }
        sessions.order.push_back(session.session_id);
        sessions.by_id.insert(session.session_id, session.clone());
        info!("Session {} created", session.session_id);
        session
    }

    pub async fn get(&self, session_id: Uuid) -> Option<AnalysisSession> {
        self.inner.read().await.by_id.get(&session_id).cloned()
    }

    /// Replaces the session's latest analysis with `analysis`.
    pub async fn install(
        &self,
        session_id: Uuid,
        analysis: Analysis,
    ) -> Result<AnalysisSession, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .by_id
            .get_mut(&session_id)
            .ok_or_else(|| session_not_found(session_id))?;

        if let Some(previous) = session.latest.replace(analysis) {
            info!(
                "Session {session_id}: analysis {} replaced",
                previous.analysis_id
            );
        }
        Ok(session.clone())
    }

    /// Drops the session and its result. Returns false if it did not exist.
    pub async fn remove(&self, session_id: Uuid) -> bool {
        let mut sessions = self.inner.write().await;
        sessions.order.retain(|id| *id != session_id);
        sessions.by_id.remove(&session_id).is_some()
    }
}
