//! Transaction management utilities.
//!
//! This module provides the all-or-nothing batch write used by group bookings.

use rusqlite::TransactionBehavior;

use crate::booking::BookingRecord;
use crate::error::Result;

use super::connection::Database;
use super::operations::insert_record;

impl Database {
    /// Writes several bookings in a single transaction.
    ///
    /// This operation is atomic: either every record is stored or none is.
    /// The transaction is rolled back when it is dropped without a commit,
    /// which happens as soon as any insert fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::database::{Database, DatabaseConfig};
    /// use seatbook::{BookingRecord, Passenger};
    ///
    /// let mut db = Database::open(DatabaseConfig::volatile()).unwrap();
    ///
    /// let records = vec![
    ///     BookingRecord::new(
    ///         "GROUP001".parse().unwrap(),
    ///         "1A".parse().unwrap(),
    ///         Passenger::new("P1", "Ada", "Lovelace").unwrap(),
    ///     ),
    ///     BookingRecord::new(
    ///         "GROUP002".parse().unwrap(),
    ///         "1B".parse().unwrap(),
    ///         Passenger::new("P2", "Alan", "Turing").unwrap(),
    ///     ),
    /// ];
    ///
    /// db.insert_bookings(&records).unwrap();
    /// assert_eq!(db.list_bookings().unwrap().len(), 2);
    /// ```
    pub fn insert_bookings(&mut self, records: &[BookingRecord]) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        for record in records {
            insert_record(&tx, record)?;
        }

        tx.commit()?;
        Ok(())
    }
}
