//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! seatbook library against real on-disk stores.

pub mod database;

use std::path::{Path, PathBuf};

use seatbook::{BookingService, DatabaseConfig, Passenger};
use tempfile::TempDir;

/// A store file inside a temporary directory.
///
/// The directory is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct TestStore {
    dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates a fixture for `seatbook.db` in a fresh temporary directory.
    /// The file itself is not created.
    pub fn new() -> Self {
        Self::with_file_name("seatbook.db")
    }

    /// Creates a fixture for `name` in a fresh temporary directory.
    pub fn with_file_name(name: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        Self { dir, path }
    }

    /// Returns the temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the store path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a configuration for the store.
    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.path)
    }

    /// Opens a booking service on the store.
    pub fn open(&self) -> BookingService {
        BookingService::open(self.config()).unwrap()
    }

    /// Opens a plain SQLite connection to the store, bypassing seatbook.
    pub fn raw(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(&self.path).unwrap()
    }

    /// Lists every file in the temporary directory, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Creates a distinct, valid passenger for `n`.
#[allow(dead_code)]
pub fn passenger(n: u32) -> Passenger {
    Passenger::new(format!("P{n:07}"), format!("First{n}"), format!("Last{n}")).unwrap()
}
