//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod session;

pub use session::StartSessionHandler;
