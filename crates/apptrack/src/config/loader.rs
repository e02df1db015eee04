use std::path::Path;

use crate::config::schema::{TrackerConfig, MAX_FOLLOW_UP_DAYS};
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrackerConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<TrackerConfig, ConfigError> {
    let config: TrackerConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &TrackerConfig) -> Result<(), ConfigError> {
    if config.follow_up_days == 0 || config.follow_up_days > MAX_FOLLOW_UP_DAYS {
        return Err(ConfigError::Validation {
            message: format!(
                "follow_up_days must be between 1 and {}, got {}",
                MAX_FOLLOW_UP_DAYS, config.follow_up_days
            ),
        });
    }

    if config.log_filter.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "log_filter must not be empty".to_string(),
        });
    }

    if let Some(path) = &config.database_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                message: "database_path must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
