//! Application repository — CRUD operations for the `applications` table.
//!
//! Rows are kept in their stored shape (ISO date text, status keys); the
//! conversion to domain records lives in [`crate::store::sqlite`].

use rusqlite::{params, Row};

use super::{Database, DatabaseError};

/// A raw application row from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    pub application_id: i64,
    pub company_name: String,
    pub role_title: String,
    pub date_applied: String,
    pub status: String,
    pub follow_up_date: String,
    pub follow_up_overridden: bool,
    pub application_link: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub archived: bool,
}

impl ApplicationRow {
    fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            application_id: row.get("application_id")?,
            company_name: row.get("company_name")?,
            role_title: row.get("role_title")?,
            date_applied: row.get("date_applied")?,
            status: row.get("status")?,
            follow_up_date: row.get("follow_up_date")?,
            follow_up_overridden: row.get("follow_up_overridden")?,
            application_link: row.get("application_link")?,
            location: row.get("location")?,
            notes: row.get("notes")?,
            archived: row.get("archived")?,
        })
    }
}

/// Inserts a new row and returns the id SQLite assigned to it.
///
/// `application_id` on the passed row is ignored.
pub fn insert(db: &Database, row: &ApplicationRow) -> Result<i64, DatabaseError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO applications (company_name, role_title, date_applied, status,
             follow_up_date, follow_up_overridden, application_link, location, notes, archived)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                row.company_name,
                row.role_title,
                row.date_applied,
                row.status,
                row.follow_up_date,
                row.follow_up_overridden,
                row.application_link,
                row.location,
                row.notes,
                row.archived,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Overwrites every column except the id. Returns the number of rows
/// touched (0 when the id does not exist).
pub fn update(db: &Database, row: &ApplicationRow) -> Result<usize, DatabaseError> {
    db.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE applications SET company_name=?2, role_title=?3, date_applied=?4,
             status=?5, follow_up_date=?6, follow_up_overridden=?7, application_link=?8,
             location=?9, notes=?10, archived=?11
             WHERE application_id=?1",
            params![
                row.application_id,
                row.company_name,
                row.role_title,
                row.date_applied,
                row.status,
                row.follow_up_date,
                row.follow_up_overridden,
                row.application_link,
                row.location,
                row.notes,
                row.archived,
            ],
        )?;
        Ok(changed)
    })
}

/// Finds an application by its id.
pub fn find_by_id(db: &Database, id: i64) -> Result<Option<ApplicationRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT * FROM applications WHERE application_id = ?1")?;
        let mut rows = stmt.query_map(params![id], ApplicationRow::from_row)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })
}

/// Every row, in id order.
pub fn list_all(db: &Database) -> Result<Vec<ApplicationRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT * FROM applications ORDER BY application_id")?;
        let rows = stmt
            .query_map([], ApplicationRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Permanently removes a row. Returns the number of rows deleted.
pub fn delete(db: &Database, id: i64) -> Result<usize, DatabaseError> {
    db.with_conn(|conn| {
        let deleted = conn.execute(
            "DELETE FROM applications WHERE application_id = ?1",
            params![id],
        )?;
        Ok(deleted)
    })
}
