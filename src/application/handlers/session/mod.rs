//! Session command handlers.

mod start_session;

pub use start_session::StartSessionHandler;
