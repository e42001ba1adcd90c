//! runtime settings of the engine, optionally read from a TOML document:
//!
//! ```toml
//! loglevel = "debug"
//! max_simplify_passes = 8
//! ```

use crate::Utils::logger;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_errors::ConfigError;
use log::{info, warn};

pub const DEFAULT_MAX_SIMPLIFY_PASSES: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// level of the terminal logger, `None` means `info`
    pub loglevel: Option<String>,
    /// bound on the number of passes of `Expr::simplify_repeatedly`, at least 1
    pub max_simplify_passes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            loglevel: None,
            max_simplify_passes: DEFAULT_MAX_SIMPLIFY_PASSES,
        }
    }
}

impl Settings {
    /// Reads the settings from a TOML document. Missing keys keep their default value, unknown
    /// keys are ignored with a warning.
    ///
    /// # Errors
    /// - `ConfigError::Toml` if the document is not valid TOML
    /// - `ConfigError::InvalidValue` if a known key holds a value of the wrong type or range
    /// - `ConfigError::UnknownLogLevel` if `loglevel` names no level
    pub fn from_toml_str(document: &str) -> Result<Settings, ConfigError> {
        let table = document
            .parse::<toml::Table>()
            .map_err(|err| ConfigError::Toml(err.to_string()))?;
        let mut settings = Settings::default();

        for (key, value) in &table {
            match key.as_str() {
                "loglevel" => {
                    let level = value.as_str().ok_or_else(|| ConfigError::InvalidValue {
                        key: key.clone(),
                        reason: format!("expected a string, found {}", value.type_str()),
                    })?;
                    logger::parse_level(level)?;
                    settings.loglevel = Some(level.to_string());
                }
                "max_simplify_passes" => {
                    let passes = value.as_integer().ok_or_else(|| ConfigError::InvalidValue {
                        key: key.clone(),
                        reason: format!("expected an integer, found {}", value.type_str()),
                    })?;
                    settings.max_simplify_passes = usize::try_from(passes)
                        .ok()
                        .filter(|&passes| passes >= 1)
                        .ok_or_else(|| ConfigError::InvalidValue {
                            key: key.clone(),
                            reason: format!("must be a positive integer, found {}", passes),
                        })?;
                }
                _ => warn!("unknown settings key '{}' ignored", key),
            }
        }
        info!("settings loaded: {:?}", settings);
        Ok(settings)
    }

    /// Installs the terminal logger at the configured level, see [`logger::init_logger`].
    pub fn init_logger(&self) -> Result<bool, ConfigError> {
        logger::init_logger(self.loglevel.as_deref().unwrap_or("info"))
    }

    /// `expr.simplify_repeatedly` bounded by `max_simplify_passes`.
    pub fn simplify(&self, expr: &Expr) -> Expr {
        expr.simplify_repeatedly(self.max_simplify_passes)
    }
}
