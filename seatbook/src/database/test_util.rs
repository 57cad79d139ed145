//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::booking::{BookingRecord, Passenger};
use crate::database::{Database, DatabaseConfig};

/// Creates a temporary file-backed test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a booking record for `seat` under `reference`.
///
/// The passenger is a fixed test passenger.
///
/// # Panics
///
/// Panics if the reference or seat code is invalid.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_record(reference: &str, seat: &str) -> BookingRecord {
    BookingRecord::new(
        reference.parse().unwrap(),
        seat.parse().unwrap(),
        Passenger::new("P1234567", "Test", "Passenger").unwrap(),
    )
}
