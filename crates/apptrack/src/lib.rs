pub mod application;
pub mod config;
pub mod db;
pub mod error;
pub mod follow_up;
pub mod logging;
pub mod query;
pub mod store;
pub mod tracker;
pub mod validation;
pub mod workflow;

pub use application::{ApplicationId, ApplicationRecord, NewApplication, Status};
pub use config::{load_config, TrackerConfig};
pub use error::{ConfigError, LoggingError, Result, TrackerError};
pub use follow_up::{compute_follow_up, is_due, FollowUpPolicy};
pub use query::{ApplicationView, Scope, StatusCounts};
pub use store::{MemoryStore, RecordStore, SqliteStore, StoreError};
pub use tracker::Tracker;
pub use validation::{validate, ApplicationDraft, ValidationError, ValidationErrors};
pub use workflow::{can_transition, WorkflowError};
