//! Tracing setup
//!
//! Plain CLI modes log to stderr. The TUI owns the terminal, so it only logs
//! when given a file to write to.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

/// Build the filter from an explicit level, falling back to `RUST_LOG`
fn filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{directives}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the filter is malformed or the log file cannot be created.
pub fn init(level: Option<&str>, target: LogTarget<'_>) -> Result<()> {
    let filter = filter(level)?;

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_is_parsed() {
        assert!(filter(Some("debug")).is_ok());
        assert!(filter(Some("word_scramble=trace,warn")).is_ok());
    }

    #[test]
    fn malformed_level_is_an_error() {
        assert!(filter(Some("word_scramble=loud")).is_err());
    }

    #[test]
    fn disabled_installs_nothing() {
        assert!(init(None, LogTarget::Disabled).is_ok());
    }
}
