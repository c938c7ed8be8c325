//! SessionStatus enum for the planning session lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a planning session.
///
/// Sessions are created in `Planning` and stay there; no transition
/// exists in the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionStatus {
    #[default]
    #[serde(rename = "planificacion")]
    Planning,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Planning => write!(f, "planificacion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_planning() {
        assert_eq!(SessionStatus::default(), SessionStatus::Planning);
    }

    #[test]
    fn serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Planning).unwrap(),
            "\"planificacion\""
        );
    }

    #[test]
    fn deserializes_from_wire_name() {
        let status: SessionStatus = serde_json::from_str("\"planificacion\"").unwrap();
        assert_eq!(status, SessionStatus::Planning);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(format!("{}", SessionStatus::Planning), "planificacion");
    }
}
