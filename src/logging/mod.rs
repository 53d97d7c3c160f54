// Logging module - tracing subscriber setup
//
// Results go to stdout, so human-readable logs are written to stderr.
// File logging optionally adds a rotating JSON-lines log for later analysis.
//
// Precedence: RUST_LOG env var > config/DRILLS_LOG_LEVEL > default "warn"

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive applied when RUST_LOG is not set
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("drills={}", config.level)
}

/// Initialize the global tracing subscriber.
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered file logs are flushed on exit. `None` when file logging is off
/// or its directory could not be created.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => {
            // File layer uses JSON format for structured log parsing
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Build the non-blocking rolling file writer, if file logging is enabled
fn file_writer(
    config: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !config.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        // Subscriber is not up yet, so this cannot go through tracing
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        return None;
    }

    let appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&config.file_dir, &config.file_prefix)
        }
    };

    // Writes happen on a background thread
    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_configured_level() {
        let mut config = LoggingConfig::default();
        assert_eq!(default_filter(&config), "drills=warn");

        config.level = "debug".to_string();
        assert_eq!(default_filter(&config), "drills=debug");
    }

    #[test]
    fn test_file_writer_disabled() {
        assert!(file_writer(&LoggingConfig::default()).is_none());
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file_enabled: true,
            file_dir: dir.path().join("logs"),
            file_rotation: LogRotation::Never,
            ..LoggingConfig::default()
        };

        let writer = file_writer(&config);
        assert!(writer.is_some());
        assert!(config.file_dir.is_dir());
    }
}
