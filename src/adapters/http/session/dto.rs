//! HTTP DTOs for session endpoints.
//!
//! These types decouple the wire contract (Spanish field names, string
//! timestamps) from the domain entity.

use serde::Serialize;

use crate::domain::foundation::SessionStatus;
use crate::domain::session::Session;

/// Success envelope for a started session.
#[derive(Debug, Clone, Serialize)]
pub struct StartSessionResponse {
    pub status: &'static str,
    pub data: SessionData,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionData {
    pub session: SessionResponse,
}

impl StartSessionResponse {
    pub fn new(session: Session) -> Self {
        Self {
            status: "success",
            data: SessionData {
                session: session.into(),
            },
        }
    }
}

/// Wire view of a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<String>,
    pub es_invitado: bool,
    pub intereses: Vec<String>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub tipo_experiencia: String,
    pub numero_viajeros: u32,
    pub restricciones: Vec<String>,
    pub estado: SessionStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id().to_string(),
            usuario_id: session.user_id().map(str::to_string),
            es_invitado: session.is_guest(),
            intereses: session.interests().to_vec(),
            fecha_inicio: session.start_date().to_iso8601(),
            fecha_fin: session.end_date().to_iso8601(),
            tipo_experiencia: session.experience_type().to_string(),
            numero_viajeros: session.traveler_count(),
            restricciones: session.restrictions().to_vec(),
            estado: session.status(),
            created_at: session.created_at().to_iso8601(),
            updated_at: session.updated_at().to_iso8601(),
        }
    }
}
