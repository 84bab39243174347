//! Database Module
//!
//! SQLite storage for preference values.

pub mod connection;
pub mod queries;
pub mod schema;

use thiserror::Error;

/// Database errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;

// Re-exports
pub use connection::{Database, DatabaseConfig};
pub use queries::{delete_preference, get_all_preferences, get_preference, set_preference, StoredPreference};
