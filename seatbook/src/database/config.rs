//! Database configuration and path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the booking store inside the data directory.
pub const DATABASE_FILE_NAME: &str = "seatbook.db";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "SEATBOOK_DATA_DIR";

/// Configuration for opening the booking store.
///
/// A configuration without a path describes a volatile, in-memory store whose
/// contents are lost when the process exits.
///
/// # Examples
///
/// ```
/// use seatbook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/seatbook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert!(!config.is_volatile());
///
/// // An empty path falls back to a volatile store.
/// assert!(DatabaseConfig::new("").is_volatile());
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file, or `None` for a volatile store.
    pub path: Option<PathBuf>,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a configuration for a file-backed store.
    ///
    /// An empty path yields a volatile store.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            path: (!path.as_os_str().is_empty()).then(|| path.to_path_buf()),
            busy_timeout: Duration::from_millis(5000),
        }
    }

    /// Creates a configuration for a volatile, in-memory store.
    #[must_use]
    pub fn volatile() -> Self {
        Self {
            path: None,
            busy_timeout: Duration::from_millis(5000),
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Returns `true` if this configuration describes an in-memory store.
    #[must_use]
    pub fn is_volatile(&self) -> bool {
        self.path.is_none()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::volatile()
    }
}

/// Returns the default data directory, `~/.seatbook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".seatbook"))
}

/// Resolves the database path using the environment or defaults.
///
/// The resolution order is:
/// 1. `$SEATBOOK_DATA_DIR/seatbook.db` if `SEATBOOK_DATA_DIR` is set
/// 2. `~/.seatbook/seatbook.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `SEATBOOK_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
        Ok(PathBuf::from(data_dir).join(DATABASE_FILE_NAME))
    } else {
        Ok(default_data_dir()?.join(DATABASE_FILE_NAME))
    }
}
