//! Database layer for durable storage of seat bookings.
//!
//! This module provides an SQLite-based store for booking records, including
//! connection management with corrupt-file quarantine, schema healing, and
//! CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use seatbook::database::{Database, DatabaseConfig};
//! use seatbook::{BookingRecord, Passenger, ReferenceGenerator, SeatInventory};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/seatbook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Store a booking
//! let record = BookingRecord::new(
//!     "ABC12345".parse().unwrap(),
//!     "10B".parse().unwrap(),
//!     Passenger::new("P1234567", "Ada", "Lovelace").unwrap(),
//! );
//! db.insert_booking(&record).unwrap();
//!
//! // Rebuild the in-memory view
//! let mut inventory = SeatInventory::new();
//! db.hydrate(&mut inventory, &mut ReferenceGenerator::new()).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{heal_schema, SchemaReport};
pub use operations::{HydrationReport, StoredBooking};
