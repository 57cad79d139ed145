//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, and opening
//! the booking service.

use crate::error::CliError;
use seatbook::database::default_data_dir;
use seatbook::{BookingService, Config, ConfigBuilder, OutputFormat, Passenger};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the booking store location.
    pub database: Option<PathBuf>,

    /// Keep bookings in memory only.
    pub in_memory: bool,

    /// Override the lock wait (in seconds).
    pub busy_timeout: Option<u64>,
}

/// Expand a leading `~` to the home directory.
///
/// Paths given through environment variables reach us unexpanded.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, CliError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = home::home_dir().ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "cannot expand '{}': home directory is unknown",
            path.display()
        ))
    })?;
    Ok(home.join(rest))
}

/// Resolve the data directory: `--data-dir` first, then `~/.seatbook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => expand_tilde(dir),
        None => default_data_dir().map_err(CliError::from),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let overrides = Config {
        database_path: global.database.as_deref().map(expand_tilde).transpose()?,
        in_memory: global.in_memory.then_some(true),
        maximum_lock_wait_seconds: global.busy_timeout,
        output_format: None,
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the booking service described by the configuration.
pub fn open_service(global: &GlobalOptions, config: &Config) -> Result<BookingService, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let service = BookingService::open(config.database_config(&data_dir))?;

    if global.verbose {
        let report = service.hydration_report();
        eprintln!(
            "Loaded {} booking(s) ({} skipped as malformed, {} reference(s) repaired)",
            report.applied, report.skipped_malformed, report.repaired_references
        );
    }

    Ok(service)
}

/// Pick the output format: the command's flag wins over configuration.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output_format())
}

/// Parse a `PASSPORT:FIRST:LAST` passenger argument.
pub fn parse_passenger(value: &str) -> Result<Passenger, String> {
    let mut parts = value.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(passport), Some(first), Some(last)) => {
            Passenger::new(passport, first, last).map_err(|e| e.to_string())
        }
        _ => Err(format!("expected PASSPORT:FIRST:LAST, got '{value}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_passenger() {
        let passenger = parse_passenger("P1234567:Eva:Ng").unwrap();
        assert_eq!(passenger.passport(), "P1234567");
        assert_eq!(passenger.first_name(), "Eva");
        assert_eq!(passenger.last_name(), "Ng");
    }

    #[test]
    fn test_parse_passenger_keeps_colons_in_last_name() {
        let passenger = parse_passenger("P1:Eva:Ng:Jr").unwrap();
        assert_eq!(passenger.last_name(), "Ng:Jr");
    }

    #[test]
    fn test_parse_passenger_rejects_missing_fields() {
        assert!(parse_passenger("P1234567:Eva").is_err());
        assert!(parse_passenger("P1234567::Ng").is_err());
        assert!(parse_passenger("").is_err());
    }

    #[test]
    fn test_expand_tilde() {
        let home = home::home_dir().unwrap();
        assert_eq!(
            expand_tilde(Path::new("~/seats/a.db")).unwrap(),
            home.join("seats/a.db")
        );
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
        assert_eq!(
            expand_tilde(Path::new("/var/~x")).unwrap(),
            PathBuf::from("/var/~x")
        );
    }

    #[test]
    fn test_resolve_data_dir_prefers_flag() {
        let global = GlobalOptions {
            data_dir: Some(PathBuf::from("/tmp/seats")),
            ..Default::default()
        };
        assert_eq!(resolve_data_dir(&global).unwrap(), PathBuf::from("/tmp/seats"));
    }

    #[test]
    fn test_load_configuration_applies_flags() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            data_dir: Some(dir.path().to_path_buf()),
            in_memory: true,
            busy_timeout: Some(9),
            ..Default::default()
        };
        let config = load_configuration(&global).unwrap();
        assert_eq!(config.in_memory, Some(true));
        assert_eq!(config.maximum_lock_wait_seconds, Some(9));
    }

    #[test]
    fn test_load_configuration_rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            data_dir: Some(dir.path().to_path_buf()),
            busy_timeout: Some(0),
            ..Default::default()
        };
        let err = load_configuration(&global).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }
}
