use crate::error::{Result as ServerErrorResult, ServerError};

use acct_config::LoggingConfig;

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

const LEVEL_COLORS: ColoredLevelConfig = ColoredLevelConfig {
    error: Color::Red,
    warn: Color::Yellow,
    info: Color::Green,
    debug: Color::Blue,
    trace: Color::Magenta,
};

/// Install the process-wide logger described by `[logging]`.
///
/// Writes to `log_file` when given (appending, never colored), otherwise to
/// stdout, colored when `logging.colored` is set.
pub fn initialize(logging: &LoggingConfig, log_file: Option<&Path>) -> ServerErrorResult<()> {
    let colored = logging.colored && log_file.is_none();

    let dispatch = Dispatch::new()
        .level(*logging.level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}]",
                humantime::format_rfc3339(SystemTime::now()),
                level_label(record, colored),
                message,
                source_label(record),
            ))
        });

    let dispatch = match log_file {
        Some(path) => dispatch.chain(fern::log_file(path).map_err(|e| ServerError::Logger {
            message: format!("cannot open {}: {e}", path.display()),
        })?),
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("a logger is already installed: {e}"),
    })?;

    info!(
        "Logging at {} to {}",
        *logging.level,
        log_file.map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
    );

    Ok(())
}

fn level_label(record: &Record, colored: bool) -> String {
    if colored {
        LEVEL_COLORS.color(record.level()).to_string()
    } else {
        record.level().to_string()
    }
}

fn source_label(record: &Record) -> String {
    format!(
        "{}:{}",
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}

