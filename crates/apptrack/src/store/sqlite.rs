//! SQLite-backed record store.

use std::path::Path;

use super::{RecordStore, StoreError};
use crate::application::{format_date, parse_date, ApplicationId, ApplicationRecord, NewApplication, Status};
use crate::db::application_repo::{self, ApplicationRow};
use crate::db::Database;

/// Record store persisting to a local SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(Database::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl RecordStore for SqliteStore {
    fn create(&mut self, application: &NewApplication) -> Result<ApplicationId, StoreError> {
        let row = ApplicationRow {
            application_id: 0,
            company_name: application.company_name.clone(),
            role_title: application.role_title.clone(),
            date_applied: format_date(application.date_applied),
            status: application.status.as_str().to_string(),
            follow_up_date: format_date(application.follow_up_date),
            follow_up_overridden: application.follow_up_overridden,
            application_link: application.application_link.clone(),
            location: application.location.clone(),
            notes: application.notes.clone(),
            archived: application.archived,
        };
        let id = application_repo::insert(&self.db, &row)?;
        Ok(ApplicationId(id))
    }

    fn read(&self, id: ApplicationId) -> Result<ApplicationRecord, StoreError> {
        application_repo::find_by_id(&self.db, id.0)?
            .ok_or(StoreError::NotFound(id))
            .and_then(record_from_row)
    }

    fn update(&mut self, record: &ApplicationRecord) -> Result<(), StoreError> {
        match application_repo::update(&self.db, &row_from_record(record))? {
            0 => Err(StoreError::NotFound(record.id)),
            _ => Ok(()),
        }
    }

    /// Rows that fail to decode are logged and left out of the snapshot.
    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        let records = application_repo::list_all(&self.db)?
            .into_iter()
            .filter_map(|row| match record_from_row(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping application: {}", e);
                    None
                }
            })
            .collect();
        Ok(records)
    }

    fn delete(&mut self, id: ApplicationId) -> Result<(), StoreError> {
        match application_repo::delete(&self.db, id.0)? {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(()),
        }
    }
}

fn row_from_record(record: &ApplicationRecord) -> ApplicationRow {
    ApplicationRow {
        application_id: record.id.0,
        company_name: record.company_name.clone(),
        role_title: record.role_title.clone(),
        date_applied: format_date(record.date_applied),
        status: record.status.as_str().to_string(),
        follow_up_date: format_date(record.follow_up_date),
        follow_up_overridden: record.follow_up_overridden,
        application_link: record.application_link.clone(),
        location: record.location.clone(),
        notes: record.notes.clone(),
        archived: record.archived,
    }
}

fn record_from_row(row: ApplicationRow) -> Result<ApplicationRecord, StoreError> {
    let id = ApplicationId(row.application_id);
    let corrupt = |reason: String| StoreError::CorruptRow { id, reason };

    let date_applied = parse_date(&row.date_applied)
        .ok_or_else(|| corrupt(format!("bad date_applied '{}'", row.date_applied)))?;
    let follow_up_date = parse_date(&row.follow_up_date)
        .ok_or_else(|| corrupt(format!("bad follow_up_date '{}'", row.follow_up_date)))?;
    let status =
        Status::parse(&row.status).ok_or_else(|| corrupt(format!("unknown status '{}'", row.status)))?;

    Ok(ApplicationRecord {
        id,
        company_name: row.company_name,
        role_title: row.role_title,
        date_applied,
        status,
        follow_up_date,
        follow_up_overridden: row.follow_up_overridden,
        application_link: row.application_link,
        location: row.location,
        notes: row.notes,
        archived: row.archived,
    })
}
