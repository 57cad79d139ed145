//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SEATBOOK_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides the store path.
pub const DATABASE_ENV: &str = "SEATBOOK_DATABASE";
/// Selects a volatile store.
pub const IN_MEMORY_ENV: &str = "SEATBOOK_IN_MEMORY";
/// Overrides the lock wait.
pub const LOCK_WAIT_ENV: &str = "SEATBOOK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "SEATBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use seatbook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var(DATABASE_ENV) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Ok(val) = env::var(IN_MEMORY_ENV) {
            config.in_memory = Some(Self::parse_bool(IN_MEMORY_ENV, &val)?);
        }

        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(format.parse::<OutputFormat>().map_err(|message| {
                    Error::Validation {
                        field: OUTPUT_FORMAT_ENV.into(),
                        message,
                    }
                })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
