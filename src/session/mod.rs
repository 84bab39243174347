//! Session Module
//!
//! In-memory user session: identifier, credential and the optional
//! collaborators that a session can drive.

pub mod link;
pub mod state;

// Re-exports
pub use link::{AlertListener, ConnectionMode, ServerLink};
pub use state::{SessionState, SessionStatus, DEFAULT_CREDENTIAL, DEFAULT_USER_ID};
