use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{Session, SessionId};

use super::RepositoryError;

/// Live sessions; each one is guarded by its own lock.
pub type SessionHandle = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: Session) -> Result<SessionHandle, RepositoryError>;

    async fn get(&self, id: SessionId) -> Result<Option<SessionHandle>, RepositoryError>;

    async fn remove(&self, id: SessionId) -> Result<Option<SessionHandle>, RepositoryError>;

    /// Drops every session idle since `cutoff` and hands back the evicted
    /// handles. Sessions locked by an in-flight request are kept.
    async fn remove_idle(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SessionHandle>, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;
}
