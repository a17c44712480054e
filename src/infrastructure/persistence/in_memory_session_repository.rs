use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::application::ports::{RepositoryError, SessionHandle, SessionRepository};
use crate::domain::{Session, SessionId};

/// Process-local session table. Nothing survives a restart.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
    max_sessions: usize,
}

impl InMemorySessionRepository {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<SessionHandle, RepositoryError> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&session.id) {
            return Err(RepositoryError::AlreadyExists(session.id.to_string()));
        }
        if sessions.len() >= self.max_sessions {
            return Err(RepositoryError::CapacityReached(self.max_sessions));
        }

        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    async fn get(&self, id: SessionId) -> Result<Option<SessionHandle>, RepositoryError> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    async fn remove(&self, id: SessionId) -> Result<Option<SessionHandle>, RepositoryError> {
        Ok(self.sessions.write().await.remove(&id))
    }

    async fn remove_idle(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SessionHandle>, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let mut evicted = Vec::new();

        sessions.retain(|_, handle| {
            let idle = handle
                .try_lock()
                .map(|session| session.is_idle_since(cutoff))
                .unwrap_or(false);
            if idle {
                evicted.push(Arc::clone(handle));
            }
            !idle
        });

        Ok(evicted)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.sessions.read().await.len())
    }
}
