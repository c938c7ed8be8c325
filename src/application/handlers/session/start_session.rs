//! StartSessionHandler - Command handler for starting planning sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{CreateSessionInput, Session};
use crate::ports::{SessionRepository, StoreError};

/// Handler for starting a planning session.
///
/// Coordinates entity creation and storage. No error originates here;
/// store failures propagate unchanged.
pub struct StartSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl StartSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Builds a session from the validated input and persists it.
    pub async fn handle(&self, input: CreateSessionInput) -> Result<Session, StoreError> {
        let session = Session::new(SessionId::new(), input);
        self.repository.create(session).await
    }
}
