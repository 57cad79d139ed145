//! Configuration schema definitions.
//!
//! This module defines the configuration structure for seatbook: where the
//! booking store lives, how long to wait on a locked store, and how listings
//! are printed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{DatabaseConfig, DATABASE_FILE_NAME};

/// Lock wait used when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, OutputFormat};
///
/// let config = Config {
///     in_memory: Some(true),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert!(config.database_config("/unused".as_ref()).is_volatile());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the booking store. Overrides the data directory; an empty
    /// path selects a volatile store.
    pub database_path: Option<PathBuf>,

    /// Keep bookings in memory only.
    pub in_memory: Option<bool>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for listing commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured lock wait, or the default.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns the configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Builds the store configuration.
    ///
    /// `in_memory` wins over any path. Otherwise `database_path` is used if
    /// set, and `<data_dir>/seatbook.db` if not.
    #[must_use]
    pub fn database_config(&self, data_dir: &Path) -> DatabaseConfig {
        let config = if self.in_memory == Some(true) {
            DatabaseConfig::volatile()
        } else {
            match &self.database_path {
                Some(path) => DatabaseConfig::new(path),
                None => DatabaseConfig::new(data_dir.join(DATABASE_FILE_NAME)),
            }
        };
        config.with_busy_timeout(self.lock_wait())
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use seatbook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format '{s}' (expected table, json or csv)")),
        }
    }
}
