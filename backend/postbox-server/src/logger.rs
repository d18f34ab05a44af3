//! Process-wide logging.
//!
//! Stdout carries console frames, so terminal logging goes to stderr. Each
//! record is tagged with the module it came from so session and store lines
//! can be told apart in one file.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr { colored: bool },
    /// Appended to, created along with its directory when missing.
    File(PathBuf),
}

impl LogSink {
    pub fn new(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None => Self::Stderr { colored },
        }
    }
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr { .. } => write!(f, "stderr"),
            Self::File(path) => write!(f, "file={}", path.display()),
        }
    }
}

/// Install the global logger.
#[track_caller]
pub fn initialize(log_level: postbox_config::LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    dispatch(level_filter, &sink)?
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={:?}, {}", level_filter, sink);
    Ok(())
}

/// Build the dispatch for `sink` without installing it.
///
/// sqlx logs every statement at info, so it is capped at warn.
pub fn dispatch(level: LevelFilter, sink: &LogSink) -> ServerErrorResult<Dispatch> {
    let output = match sink {
        LogSink::File(path) => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {target}: {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    target = short_target(record.target()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(open_append(path)?),
        LogSink::Stderr { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {target}: {message}",
                        date = humantime::format_rfc3339(SystemTime::now()),
                        level = colors.color(record.level()),
                        target = short_target(record.target()),
                        message = message,
                    ))
                })
                .chain(std::io::stderr())
        }
        LogSink::Stderr { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {target}: {message}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    target = short_target(record.target()),
                    message = message,
                ))
            })
            .chain(std::io::stderr()),
    };

    Ok(Dispatch::new()
        .level(level)
        .level_for("sqlx", level.min(LevelFilter::Warn))
        .chain(output))
}

fn open_append(path: &Path) -> ServerErrorResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// `postbox_session::driver` is logged as `session::driver`.
pub(crate) fn short_target(target: &str) -> &str {
    target.strip_prefix("postbox_").unwrap_or(target)
}
