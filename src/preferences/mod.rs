//! Preferences Module
//!
//! Preference screens, value summaries and persistent storage.

pub mod definition;
pub mod ringtone;
pub mod store;
pub mod summary;

use thiserror::Error;

/// Preference errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),

    #[error("Invalid preference resource: {0}")]
    InvalidResource(#[from] serde_json::Error),

    #[error("Unknown preference: {0}")]
    Unknown(String),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

// Re-exports
pub use definition::{PreferenceCatalog, PreferenceDef, PreferenceKind, PreferenceScreen};
pub use ringtone::{BuiltinRingtones, RingtoneCatalog};
pub use store::PreferenceStore;
pub use summary::{next_value, summary, SILENT_SUMMARY};
