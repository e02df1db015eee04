use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::follow_up::{FollowUpPolicy, DEFAULT_FOLLOW_UP_DAYS};

/// Longest follow-up offset accepted from configuration.
pub const MAX_FOLLOW_UP_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// SQLite file holding the applications. Defaults to
    /// `~/.apptrack/data/apptrack.db`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default = "default_follow_up_days")]
    pub follow_up_days: u32,
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_follow_up_days() -> u32 {
    DEFAULT_FOLLOW_UP_DAYS
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            follow_up_days: default_follow_up_days(),
            log_filter: default_log_filter(),
        }
    }
}

impl TrackerConfig {
    /// The configured database path, falling back to the per-user default.
    pub fn resolved_database_path(&self) -> Option<PathBuf> {
        self.database_path
            .clone()
            .or_else(crate::db::default_database_path)
    }

    pub fn follow_up_policy(&self) -> FollowUpPolicy {
        FollowUpPolicy::new(self.follow_up_days)
    }
}
