use crate::config::{LoggingConfig, YokatlasConfig};
use crate::error::{Result, YokatlasError};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the process-wide subscriber: stderr plus a daily-rotated file.
///
/// Stdout is reserved for protocol frames. File writes go through a
/// non-blocking worker; keep the returned guard alive until shutdown so
/// buffered lines are flushed.
pub fn init(config: &YokatlasConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("yokatlas_mcp={}", config.server.log_level)));

    let (file_layer, guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| YokatlasError::internal(format!("failed to install logger: {}", e)))?;

    Ok(guard)
}

/// Opens the daily-rolling log file under `config.directory`.
///
/// Returns `None` when the directory or file cannot be opened, in which case
/// the caller logs to stderr only.
pub fn file_writer(config: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    let opened = std::fs::create_dir_all(&config.directory)
        .map_err(|e| e.to_string())
        .and_then(|()| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(config.file_prefix.as_str())
                .build(&config.directory)
                .map_err(|e| e.to_string())
        });

    match opened {
        Ok(appender) => Some(tracing_appender::non_blocking(appender)),
        Err(e) => {
            eprintln!(
                "log directory {} unavailable ({}), logging to stderr only",
                config.directory.display(),
                e
            );
            None
        }
    }
}
