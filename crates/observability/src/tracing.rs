//! Tracing/logging initialization.
//!
//! Events go to an append-only log file rather than the terminal, so console
//! output stays reserved for reports.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Log file used when nothing else is configured.
pub const DEFAULT_LOG_PATH: &str = "inventory.log";

/// Where log events go and which of them are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// File the events are appended to.
    pub path: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`, `warn`).
    pub level: String,
    /// Emit one JSON object per event instead of plain text lines.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    fn filter(&self) -> anyhow::Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .with_context(|| format!("invalid log level directive {:?}", self.level)),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Fails only when
/// the log file cannot be opened or the level directive does not parse.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = config.filter()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .with_context(|| format!("failed to open log file {}", config.path.display()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_ansi(false)
        .with_target(false);

    // An already-installed global subscriber wins.
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_in_inventory_log() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.path, PathBuf::from("inventory.log"));
        assert_eq!(cfg.level, "info");
        assert!(!cfg.json);
    }

    #[test]
    fn init_writes_leveled_events_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = LogConfig::default().with_path(dir.path().join("events.log"));

        init(&cfg).unwrap();
        init(&cfg).unwrap();

        ::tracing::warn!(item = "orange", "item 'orange' not found in stock");
        ::tracing::error!("quantity must be a non-negative integer (got -1)");

        let text = std::fs::read_to_string(&cfg.path).unwrap();
        assert!(text.contains("WARN"), "log was: {text}");
        assert!(text.contains("item 'orange' not found in stock"), "log was: {text}");
        assert!(text.contains("ERROR"), "log was: {text}");
    }

    #[test]
    fn unopenable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = LogConfig::default().with_path(dir.path().join("no-such-dir").join("x.log"));
        assert!(init(&cfg).is_err());
    }
}
