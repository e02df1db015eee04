//! Record access boundary between the tracker and durable state.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

use crate::application::{ApplicationId, ApplicationRecord, NewApplication};
use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Application {0} not found")]
    NotFound(ApplicationId),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// A persisted row no longer decodes into a record.
    #[error("Stored application {id} is unreadable: {reason}")]
    CorruptRow { id: ApplicationId, reason: String },
}

/// Persistence operations the tracker relies on.
///
/// Implementations hold no business rules: they store what they are given.
/// Every write either applies completely or not at all.
pub trait RecordStore {
    /// Persists a new application and returns its freshly assigned id.
    /// Ids are never handed out twice, even after a delete.
    fn create(&mut self, application: &NewApplication) -> Result<ApplicationId, StoreError>;

    fn read(&self, id: ApplicationId) -> Result<ApplicationRecord, StoreError>;

    /// Replaces the stored record with the same id.
    fn update(&mut self, record: &ApplicationRecord) -> Result<(), StoreError>;

    /// Every record, in id order.
    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError>;

    /// Removes a record permanently.
    fn delete(&mut self, id: ApplicationId) -> Result<(), StoreError>;
}
