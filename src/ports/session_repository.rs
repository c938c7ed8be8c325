//! Session repository port (write side).
//!
//! The only storage contract in scope: persist a newly created session
//! and hand back the stored value.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::Session;

/// Failure to persist a session.
///
/// The in-memory adapter cannot raise this; durable implementations
/// might, and callers must not discard it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Repository port for session persistence.
///
/// `create` keys by the session's own id. A duplicate key overwrites,
/// which is acceptable because callers always supply a freshly
/// generated id.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session and return the stored value.
    ///
    /// # Errors
    ///
    /// - `StoreError` on persistence failure
    async fn create(&self, session: Session) -> Result<Session, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
