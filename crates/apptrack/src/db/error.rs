use std::path::PathBuf;
use thiserror::Error;

/// Failures below the record store. None of them can be retried by the user.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Creating the directory for the database file failed.
    #[error("Cannot create database directory '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema setup failed at version {version}: {reason}")]
    Migration { version: u32, reason: String },

    /// Another thread panicked while holding the connection.
    #[error("Database connection lock poisoned")]
    LockPoisoned,
}
