//! Diagnostics to a log file.
//!
//! The TUI owns stdout and stderr while it runs, so events go to
//! `<log dir>/nsmq-quiz.log` through a non-blocking writer. Filtering
//! follows `RUST_LOG`, defaulting to `info`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "nsmq-quiz.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot create log directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Install(String),
}

/// Default log directory.
///
/// `~/.cache/nsmq-quiz/logs` on Linux, `~/Library/Caches/nsmq-quiz/logs` on
/// macOS, falling back to the system temp dir.
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("nsmq-quiz")
        .join("logs")
}

/// Install the global file subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// and closes the writer.
pub fn init(log_dir: &Path) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!(log_file = %log_dir.join(LOG_FILE_NAME).display(), "logging initialized");

    Ok(guard)
}
