//! Error types for wikisearch-core

use thiserror::Error;

/// Result type alias using wikisearch-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wikisearch-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// `SQLite` error (malformed snapshot, missing table, query failure)
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error (snapshot directory not readable)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
