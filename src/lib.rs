//! Rumbo - Travel-planning session backend.
//!
//! Accepts requests to begin a travel-planning session, validates the
//! payload, and keeps the resulting session records in memory.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
