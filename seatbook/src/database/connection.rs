//! Opening the booking store.
//!
//! Opening never leaves the system without a usable store: an empty path
//! selects an in-memory store, missing directories are created, and a file
//! that is not an SQLite database is moved aside and replaced with a fresh
//! store. Any other failure is fatal and reported as
//! [`Error::StoreUnavailable`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, ErrorCode, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;
use super::migrations::{heal_schema, SchemaReport};
use super::schema::CHECK_STORE;

/// A connection to the booking store.
///
/// # Examples
///
/// ```no_run
/// use seatbook::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/seatbook.db");
/// let db = Database::open(config).unwrap();
/// if let Some(moved) = db.quarantined() {
///     eprintln!("corrupt store moved to {}", moved.display());
/// }
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
    quarantined: Option<PathBuf>,
    schema: SchemaReport,
}

impl Database {
    /// Opens the store described by `config`.
    ///
    /// This function will:
    /// - Open an in-memory store if no path is configured
    /// - Create the parent directory if it does not exist
    /// - Quarantine a file that is not an SQLite database and start afresh
    /// - Set WAL mode and the busy timeout
    /// - Create the booking table or add its missing columns
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] for any failure other than a
    /// corrupt file, such as a directory that cannot be created or a file
    /// that cannot be renamed.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let Some(path) = config.path.clone() else {
            return Self::open_volatile(config).map_err(|e| Error::StoreUnavailable {
                path: PathBuf::from(":memory:"),
                source: Box::new(e),
            });
        };

        Self::open_file(&path, config).map_err(|e| match e {
            Error::StoreUnavailable { .. } => e,
            other => Error::StoreUnavailable {
                path,
                source: Box::new(other),
            },
        })
    }

    fn open_volatile(config: DatabaseConfig) -> Result<Self> {
        log::info!("No store path configured; bookings will be lost when the process exits");
        let conn = Connection::open_in_memory()?;
        let schema = heal_schema(&conn)?;
        Ok(Self {
            conn,
            config,
            quarantined: None,
            schema,
        })
    }

    fn open_file(path: &Path, config: DatabaseConfig) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut quarantined = None;
        let conn = match Self::connect(path) {
            Ok(conn) => conn,
            Err(e) if is_corruption(&e) => {
                let moved = quarantine(path, Utc::now())?;
                log::warn!(
                    "{} is not a valid booking store ({e}); moved it to {} and started a new store",
                    path.display(),
                    moved.display()
                );
                quarantined = Some(moved);
                Self::connect(path)?
            }
            Err(e) => return Err(e),
        };

        // PRAGMA journal_mode returns a result, so it goes through query_row.
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        let schema = heal_schema(&conn)?;

        Ok(Self {
            conn,
            config,
            quarantined,
            schema,
        })
    }

    /// Opens `path` and reads the schema catalogue, which fails fast on
    /// files that are not SQLite databases.
    fn connect(path: &Path) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        let _: i64 = conn.query_row(CHECK_STORE, [], |row| row.get(0))?;
        Ok(conn)
    }

    /// Returns the configuration this store was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns `true` if this is an in-memory store.
    #[must_use]
    pub fn is_volatile(&self) -> bool {
        self.config.is_volatile()
    }

    /// Returns where a corrupt file was moved to, if one was found at open time.
    #[must_use]
    pub fn quarantined(&self) -> Option<&Path> {
        self.quarantined.as_deref()
    }

    /// Returns what schema healing did when the store was opened.
    #[must_use]
    pub const fn schema_report(&self) -> &SchemaReport {
        &self.schema
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn is_corruption(err: &Error) -> bool {
    matches!(
        err,
        Error::Database(rusqlite::Error::SqliteFailure(e, _))
            if matches!(e.code, ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt)
    )
}

/// Renames a corrupt store out of the way and returns its new path.
///
/// The new name embeds a timestamp, e.g. `bookings.db` becomes
/// `bookings.corrupt-20240115-103045.db`. A counter is appended if that name
/// is already taken.
fn quarantine(path: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let target = quarantine_path(path, now);
    std::fs::rename(path, &target)?;
    Ok(target)
}

fn quarantine_path(path: &Path, now: DateTime<Utc>) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "store".to_string(), |s| s.to_string_lossy().into_owned());
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());
    let stamp = now.format("%Y%m%d-%H%M%S");

    let mut attempt = 0u32;
    loop {
        let suffix = if attempt == 0 {
            String::new()
        } else {
            format!("-{attempt}")
        };
        let name = match &extension {
            Some(ext) => format!("{stem}.corrupt-{stamp}{suffix}.{ext}"),
            None => format!("{stem}.corrupt-{stamp}{suffix}"),
        };
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        attempt += 1;
    }
}
