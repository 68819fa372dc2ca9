//! Logging infrastructure.
//!
//! Structured `tracing` output to a log file (cleared on each start) and to
//! stderr. Verbosity follows `RUST_LOG`, defaulting to `info`.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files, created if missing
/// * `log_file` - Log file name inside `log_dir`
///
/// # Returns
///
/// A [`LoggingGuard`] that must be held until the program exits.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// truncated.
pub fn init_logging(log_dir: &Path, log_file: &str) -> Result<LoggingGuard, io::Error> {
    let (non_blocking_file, file_guard) = prepare_log_file(log_dir, log_file)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    // stdout carries command output, so diagnostics go to stderr
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .compact();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the directory, truncate the file, and open a non-blocking writer.
fn prepare_log_file(
    log_dir: &Path,
    log_file: &str,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    Ok(tracing_appender::non_blocking(file_appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_creates_nested_directory_and_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("deep").join("logs");

        let (_writer, _guard) = prepare_log_file(&log_dir, "test.log").unwrap();

        let log_path = log_dir.join("test.log");
        assert!(log_path.exists());
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_prepare_clears_existing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("test.log");
        fs::write(&log_path, "old log data").unwrap();

        let (_writer, _guard) = prepare_log_file(temp_dir.path(), "test.log").unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_prepare_fails_when_directory_is_a_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(prepare_log_file(&blocker.join("logs"), "test.log").is_err());
    }

    // init_logging installs a global subscriber and can only run once per
    // process, so it is exercised by the CLI rather than here.
}
