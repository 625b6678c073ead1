use std::fs::OpenOptions;
use std::io::{self, Write};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines end up for this run.
pub enum LogSink {
    File(std::fs::File),
    /// The log file could not be opened; carries the reason.
    Stdout(io::Error),
}

/// Opens `path` for appending, creating it when absent.
pub fn open_log_sink(path: &str) -> LogSink {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => LogSink::File(file),
        Err(e) => LogSink::Stdout(e),
    }
}

/// Installs the global subscriber writing to `log_file`, or stdout when
/// the file is unavailable.
///
/// The returned guard flushes buffered lines on drop and must be held
/// until the process exits.
pub fn init_logging(log_file: &str) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let sink = open_log_sink(log_file);
    let (writer, fallback_reason) = match sink {
        LogSink::File(file) => (Box::new(file) as Box<dyn Write + Send>, None),
        LogSink::Stdout(e) => (Box::new(io::stdout()) as Box<dyn Write + Send>, Some(e)),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    fmt()
        .with_env_filter(filter)
        .with_ansi(fallback_reason.is_some())
        .with_target(false)
        .with_writer(non_blocking)
        .init();

    if let Some(e) = fallback_reason {
        info!(error = %e, "Failed to log to file, using default stdout");
    }

    guard
}
