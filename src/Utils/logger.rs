//! Terminal logging for the engine.
//!
//! The library itself only emits records through the `log` macros, nothing is printed unless the
//! application installs a logger. `init_logger` installs a `simplelog` terminal logger, the same
//! one for every caller of the process.

use crate::symbolic::symbolic_errors::ConfigError;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Maps a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`) to a filter.
/// Names are case sensitive.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(ConfigError::UnknownLogLevel(level.to_string())),
    }
}

/// Installs the terminal logger with the given level.
///
/// # Returns
/// `Ok(true)` if the logger was installed by this call, `Ok(false)` if a logger was already
/// installed in the process (the existing one is kept).
///
/// # Errors
/// `ConfigError::UnknownLogLevel` for a level name `parse_level` does not accept.
pub fn init_logger(level: &str) -> Result<bool, ConfigError> {
    let log_option = parse_level(level)?;
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    match logger_instance {
        Ok(()) => {
            info!("logger started with loglevel: {}", log_option);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}
