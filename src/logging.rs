//! Tracing subscriber setup
//!
//! Logs go to stderr unless a log file is given, so stdout only carries
//! scan results.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: u8,
    pub json: bool,
    pub file: Option<PathBuf>,
}

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("latest-versions.log"));
    (dir, file_name)
}

/// Colours only for an interactive stderr
fn ansi_enabled(to_file: bool, stderr_is_terminal: bool) -> bool {
    !to_file && stderr_is_terminal
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the program.
pub fn init_logging(options: &LogOptions) -> Result<WorkerGuard, LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(options.verbose).as_str()));

    let (writer, guard) = match &options.file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path);
            std::fs::create_dir_all(&dir)?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(ansi_enabled(
            options.file.is_some(),
            std::io::stderr().is_terminal(),
        ));

    if options.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()?;
    }

    Ok(guard)
}
