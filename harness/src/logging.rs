//! `tracing` subscriber setup driven by the settings file's `debug_level`.
//!
//! `RUST_LOG`, when set and valid, takes precedence over the settings.
//! Events go to stderr so stdout carries only the run output.

use tracing_subscriber::EnvFilter;

use crate::config::DebugLevel;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to install tracing subscriber: {detail}")]
    Install { detail: String },
}

/// Filter for `level`, unless `RUST_LOG` overrides it.
#[must_use]
pub fn env_filter(level: DebugLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Filter for `level`, ignoring the environment.
#[must_use]
pub fn level_filter(level: DebugLevel) -> EnvFilter {
    EnvFilter::new(level.filter_directive())
}

/// Install the global subscriber.
///
/// # Errors
///
/// [`LoggingError::Install`] if a global subscriber is already set.
pub fn init(level: DebugLevel) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::Install {
            detail: e.to_string(),
        })?;
    tracing::debug!(debug_level = %level, "logging initialised");
    Ok(())
}
