//! # echochat_core
//!
//! Core domain logic for Echochat: wire models, the echo transformation,
//! and the chat view state shared by every front end.

pub mod echo;
pub mod models;
pub mod view;

/// Path of the echo endpoint.
pub const CHAT_ROUTE: &str = "/api/chat";

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
