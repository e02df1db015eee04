//! Test harness backed by a temporary SQLite file.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use apptrack::{SqliteStore, Tracker, TrackerConfig};

/// A tracker over a database file that is removed when the harness drops.
pub struct TestHarness {
    temp_dir: TempDir,
    /// Location of the database file inside `temp_dir`.
    pub db_path: PathBuf,
    pub tracker: Tracker<SqliteStore>,
}

impl TestHarness {
    /// Creates a harness with the default follow-up policy.
    pub fn new() -> Self {
        Self::with_follow_up_days(10)
    }

    pub fn with_follow_up_days(days: u32) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("data").join("apptrack.db");
        let tracker = Tracker::open(&Self::config(&db_path, days)).expect("Failed to open tracker");

        Self {
            temp_dir,
            db_path,
            tracker,
        }
    }

    /// Drops the current tracker and opens the same file again, as a
    /// restarted application would.
    pub fn reopen(&mut self) {
        let days = self.tracker.policy().offset_days();
        self.tracker =
            Tracker::open(&Self::config(&self.db_path, days)).expect("Failed to reopen tracker");
    }

    fn config(db_path: &Path, follow_up_days: u32) -> TrackerConfig {
        TrackerConfig {
            database_path: Some(db_path.to_path_buf()),
            follow_up_days,
            ..Default::default()
        }
    }
}
