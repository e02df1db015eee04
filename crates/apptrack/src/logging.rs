//! Process-wide logging setup.
//!
//! Library code logs through both the `log` facade and `tracing`; `init`
//! routes everything into a single `tracing-subscriber` pipeline.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::LoggingError;

/// Builds the filter: `RUST_LOG` when set and valid, `default_filter`
/// otherwise.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Installs the `log` bridge, then the global subscriber.
///
/// Fails without installing anything if a `log` logger is already set. If
/// only the subscriber slot is taken, the bridge stays installed and feeds
/// whichever subscriber owns that slot.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    tracing_log::LogTracer::init()?;

    let subscriber = Registry::default()
        .with(env_filter(default_filter))
        .with(fmt::layer().with_target(true));
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!(filter = default_filter, "Logging initialized");
    Ok(())
}
