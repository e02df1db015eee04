use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationId;
use crate::store::StoreError;
use crate::validation::ValidationErrors;
use crate::workflow::WorkflowError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("Application {0} not found")]
    NotFound(ApplicationId),

    #[error("Storage error: {0}")]
    Storage(#[source] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TrackerError {
    /// Whether the user can fix the problem and retry.
    ///
    /// Storage and configuration failures are fatal for the operation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackerError::Validation(_) | TrackerError::Workflow(_) | TrackerError::NotFound(_)
        )
    }
}

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => TrackerError::NotFound(id),
            other => TrackerError::Storage(other),
        }
    }
}

impl From<crate::db::DatabaseError> for TrackerError {
    fn from(err: crate::db::DatabaseError) -> Self {
        TrackerError::Storage(StoreError::Database(err))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to install log bridge: {0}")]
    LogBridge(#[from] log::SetLoggerError),

    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
