//! In-memory session repository adapter.
//!
//! Keeps sessions in a process-local map; state lives for the process
//! lifetime only.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::Session;
use crate::ports::{SessionRepository, StoreError};

/// In-memory session store keyed by session id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no session has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, StoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::CreateSessionInput;
    use chrono::{TimeZone, Utc};

    fn test_session() -> Session {
        let input = CreateSessionInput {
            user_id: None,
            interests: vec!["aventura".to_string()],
            start_date: Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).unwrap(),
            experience_type: "Aventura Andina".to_string(),
            traveler_count: 2,
            restrictions: Vec::new(),
        };
        Session::new(SessionId::new(), input)
    }

    #[tokio::test]
    async fn create_returns_the_stored_value() {
        let repo = InMemorySessionRepository::new();
        let session = test_session();

        let stored = repo.create(session.clone()).await.unwrap();

        assert_eq!(stored, session);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn stores_each_session_under_its_own_key() {
        let repo = InMemorySessionRepository::new();

        repo.create(test_session()).await.unwrap();
        repo.create(test_session()).await.unwrap();

        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_ids_overwrite() {
        let repo = InMemorySessionRepository::new();
        let session = test_session();

        repo.create(session.clone()).await.unwrap();
        repo.create(session).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemorySessionRepository::new();
        let clone = repo.clone();

        repo.create(test_session()).await.unwrap();

        assert_eq!(clone.len().await, 1);
        assert!(!clone.is_empty().await);
    }

    #[tokio::test]
    async fn starts_empty() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.is_empty().await);
    }
}
