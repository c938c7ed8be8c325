//! Session aggregate entity.
//!
//! A session is the persisted record of one travel-planning request.
//! It is created once from a validated input and never mutated; the
//! only lifecycle status is `Planning`.

use serde::{Deserialize, Serialize};

use super::validation::CreateSessionInput;
use crate::domain::foundation::{SessionId, SessionStatus, Timestamp};

/// Travel-planning session.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `is_guest` is true iff no user identifier was supplied
/// - `interests` and `restrictions` preserve request order
/// - `created_at == updated_at` at creation; nothing in scope changes them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user_id: Option<String>,
    is_guest: bool,
    interests: Vec<String>,
    start_date: Timestamp,
    end_date: Timestamp,
    experience_type: String,
    traveler_count: u32,
    restrictions: Vec<String>,
    status: SessionStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Creates a new planning session from a validated input.
    pub fn new(id: SessionId, input: CreateSessionInput) -> Self {
        let now = Timestamp::now();
        let is_guest = input.user_id.is_none();
        Self {
            id,
            user_id: input.user_id,
            is_guest,
            interests: input.interests,
            start_date: Timestamp::from_datetime(input.start_date),
            end_date: Timestamp::from_datetime(input.end_date),
            experience_type: input.experience_type,
            traveler_count: input.traveler_count,
            restrictions: input.restrictions,
            status: SessionStatus::Planning,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owning user's identifier, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns true when the session was started without a user.
    pub fn is_guest(&self) -> bool {
        self.is_guest
    }

    /// Returns the interests, in request order.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Returns the trip start date.
    pub fn start_date(&self) -> &Timestamp {
        &self.start_date
    }

    /// Returns the trip end date.
    pub fn end_date(&self) -> &Timestamp {
        &self.end_date
    }

    /// Returns the experience type label.
    pub fn experience_type(&self) -> &str {
        &self.experience_type
    }

    /// Returns the traveler count.
    pub fn traveler_count(&self) -> u32 {
        self.traveler_count
    }

    /// Returns the restrictions, in request order.
    pub fn restrictions(&self) -> &[String] {
        &self.restrictions
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn test_input(user_id: Option<&str>) -> CreateSessionInput {
        CreateSessionInput {
            user_id: user_id.map(str::to_string),
            interests: vec!["aventura".to_string(), "gastronomia".to_string()],
            start_date: Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).unwrap(),
            experience_type: "Aventura Andina".to_string(),
            traveler_count: 2,
            restrictions: vec!["vegetariano".to_string()],
        }
    }

    #[test]
    fn session_without_user_is_a_guest() {
        let session = Session::new(SessionId::new(), test_input(None));
        assert!(session.is_guest());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn session_with_user_is_not_a_guest() {
        let session = Session::new(SessionId::new(), test_input(Some("user-7")));
        assert!(!session.is_guest());
        assert_eq!(session.user_id(), Some("user-7"));
    }

    #[test]
    fn new_session_is_planning() {
        let session = Session::new(SessionId::new(), test_input(None));
        assert_eq!(session.status(), SessionStatus::Planning);
    }

    #[test]
    fn creation_timestamps_are_equal() {
        let session = Session::new(SessionId::new(), test_input(None));
        assert_eq!(session.created_at(), session.updated_at());
    }

    #[test]
    fn keeps_the_assigned_id() {
        let id = SessionId::new();
        let session = Session::new(id, test_input(None));
        assert_eq!(session.id(), &id);
    }

    #[test]
    fn preserves_interest_order() {
        let session = Session::new(SessionId::new(), test_input(None));
        assert_eq!(session.interests(), ["aventura", "gastronomia"]);
    }

    #[test]
    fn preserves_trip_dates() {
        let session = Session::new(SessionId::new(), test_input(None));
        assert_eq!(session.start_date().to_iso8601(), "2025-12-10T00:00:00.000Z");
        assert_eq!(session.end_date().to_iso8601(), "2025-12-20T00:00:00.000Z");
    }

    #[test]
    fn empty_restrictions_stay_empty() {
        let input = CreateSessionInput {
            restrictions: Vec::new(),
            ..test_input(None)
        };
        let session = Session::new(SessionId::new(), input);
        assert!(session.restrictions().is_empty());
    }
}
