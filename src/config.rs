//! Configuration management for the phone sign-in app.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first through `dotenvy`.

use crate::error::{ConfigResult, ConfigurationError};
use crate::screens::Locale;
use std::env;

/// Environment variable selecting the UI language.
pub const LOCALE_VAR: &str = "PHONE_SIGNIN_LOCALE";

/// Environment variable with the fallback tracing filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration for the phone sign-in app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// UI language (default: vi)
    pub locale: Locale,

    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_SIGNIN_LOCALE`: `vi` or `en` (default: `vi`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let locale = match env::var(LOCALE_VAR) {
            Ok(val) => val
                .parse::<Locale>()
                .map_err(|reason| ConfigurationError::InvalidValue {
                    var: LOCALE_VAR.to_string(),
                    reason,
                })?,
            Err(_) => Locale::default(),
        };

        let log_level = match env::var(LOG_LEVEL_VAR) {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigurationError::InvalidValue {
                    var: LOG_LEVEL_VAR.to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => val,
            Err(_) => "warn".to_string(),
        };

        Ok(Config { locale, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            log_level: "warn".to_string(),
        }
    }
}
