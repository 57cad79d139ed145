//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest lock wait accepted, in seconds.
pub const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
            if timeout > MAX_LOCK_WAIT_SECONDS {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: format!("Timeout must be at most {MAX_LOCK_WAIT_SECONDS} seconds"),
                });
            }
        }

        if let Some(ref path) = config.database_path {
            if path.is_dir() {
                return Err(Error::Validation {
                    field: "database_path".into(),
                    message: format!("{} is a directory", path.display()),
                });
            }
        }

        Ok(())
    }
}
