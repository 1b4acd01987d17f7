// src/log.rs
// Global tracing setup: stderr always, plus an optional plain-text file.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Default filter for a `-v` count. `RUST_LOG` wins when set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn default_log_file() -> PathBuf {
    Path::new(LOG_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Hold the returned guard until exit so the
/// file writer flushes.
pub fn init_logging(
    verbosity: u8,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(path) = log_file else {
        tracing_subscriber::registry().with(filter).with(stderr).try_init()?;
        return Ok(None);
    };

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;
    let name = path.file_name().ok_or("log file path has no file name")?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;
    Ok(Some(guard))
}
