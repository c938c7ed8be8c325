//! Travel-planning session domain module.
//!
//! Covers the path from raw request payload to persisted entity:
//! request validation (`validation`) and the session aggregate
//! (`aggregate`).

mod aggregate;
mod validation;

pub use aggregate::Session;
pub use validation::{validate_create_session, CreateSessionInput, ValidationErrors};
