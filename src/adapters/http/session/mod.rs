//! HTTP surface for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{SessionData, SessionResponse, StartSessionResponse};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
