//! In-memory record store.

use std::collections::BTreeMap;

use super::{RecordStore, StoreError};
use crate::application::{ApplicationId, ApplicationRecord, NewApplication};

/// Records kept in an ordered map keyed by id.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: BTreeMap<ApplicationId, ApplicationRecord>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn create(&mut self, application: &NewApplication) -> Result<ApplicationId, StoreError> {
        let id = ApplicationId(self.next_id);
        self.next_id += 1;
        self.records
            .insert(id, application.clone().into_record(id));
        Ok(id)
    }

    fn read(&self, id: ApplicationId) -> Result<ApplicationRecord, StoreError> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, record: &ApplicationRecord) -> Result<(), StoreError> {
        let slot = self
            .records
            .get_mut(&record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record.clone();
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete(&mut self, id: ApplicationId) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
