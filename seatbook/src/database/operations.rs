//! Database CRUD operations for bookings.
//!
//! Rows are read leniently: a store written by another program may hold
//! NULLs or values of the wrong type, so every column is decoded from its
//! raw SQLite value and validated afterwards.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, TransactionBehavior};
use serde::Serialize;

use crate::booking::{BookingRecord, Passenger};
use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::reference::{Reference, ReferenceGenerator};
use crate::seat::{Column, SeatId};

use super::connection::Database;
use super::schema::{
    CHECK_REFERENCE_EXISTS, DELETE_BOOKINGS_FOR_SEAT, INSERT_BOOKING, LIST_BOOKINGS,
    REPAIR_REFERENCE, SELECT_BY_REFERENCE, SELECT_BY_SEAT,
};

/// A booking row exactly as found in the store.
///
/// Every field is optional because the store does not enforce types or
/// NOT NULL constraints. Use [`StoredBooking::to_record`] to validate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoredBooking {
    /// The `ref` column.
    pub reference: Option<String>,
    /// The `passport` column.
    pub passport: Option<String>,
    /// The `first_name` column.
    pub first_name: Option<String>,
    /// The `last_name` column.
    pub last_name: Option<String>,
    /// The `row` column.
    pub row: Option<i64>,
    /// The `col` column.
    pub col: Option<String>,
}

impl StoredBooking {
    /// Returns the seat this row names.
    ///
    /// # Errors
    ///
    /// Returns an error if the row or column is missing or out of range.
    pub fn seat(&self) -> Result<SeatId> {
        let raw = format!(
            "{}{}",
            self.row.map(|r| r.to_string()).unwrap_or_default(),
            self.col.as_deref().unwrap_or_default()
        );
        let row = self
            .row
            .and_then(|r| u8::try_from(r).ok())
            .ok_or_else(|| Error::OutOfRange { input: raw.clone() })?;

        let mut letters = self.col.as_deref().unwrap_or_default().trim().chars();
        let column = match (letters.next(), letters.next()) {
            (Some(letter), None) => Column::from_letter(letter),
            _ => None,
        }
        .ok_or(Error::MalformedCode { input: raw })?;

        SeatId::new(row, column)
    }

    /// Returns the stored reference, trimmed and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] if the reference is missing or
    /// does not have the expected shape.
    pub fn reference(&self) -> Result<Reference> {
        let text = self.reference.as_deref().unwrap_or_default();
        Ok(text.trim().to_uppercase().parse()?)
    }

    /// Validates the row into a [`BookingRecord`].
    ///
    /// Missing passenger fields become empty strings; the seat and reference
    /// must be valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat or the reference is invalid.
    pub fn to_record(&self) -> Result<BookingRecord> {
        let seat = self.seat()?;
        let reference = self.reference()?;
        let passenger = Passenger::from_stored(
            self.passport.clone().unwrap_or_default(),
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
        );
        Ok(BookingRecord::new(reference, seat, passenger))
    }
}

/// What hydration did with the stored rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Rows that reserved a seat in memory.
    pub applied: usize,
    /// Rows whose seat was not free (already reserved, or storage).
    pub skipped_occupied: usize,
    /// Rows whose seat could not be decoded.
    pub skipped_malformed: usize,
    /// Applied rows whose stored reference was rewritten.
    pub repaired_references: usize,
}

fn text_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integer_value(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) if f.fract() == 0.0 => Some(f as i64),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        _ => None,
    }
}

/// Decodes a row selected as: ref, passport, `first_name`, `last_name`, row, col.
fn row_to_stored(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredBooking> {
    Ok(StoredBooking {
        reference: text_value(row.get_ref(0)?),
        passport: text_value(row.get_ref(1)?),
        first_name: text_value(row.get_ref(2)?),
        last_name: text_value(row.get_ref(3)?),
        row: integer_value(row.get_ref(4)?),
        col: text_value(row.get_ref(5)?),
    })
}

/// Inserts one record on an open connection or transaction.
pub(super) fn insert_record(conn: &Connection, record: &BookingRecord) -> Result<()> {
    conn.execute(
        INSERT_BOOKING,
        params![
            record.reference.as_str(),
            record.passenger.passport(),
            record.passenger.first_name(),
            record.passenger.last_name(),
            i64::from(record.seat.row()),
            record.seat.column().letter().to_string(),
        ],
    )?;
    Ok(())
}

impl Database {
    /// Writes one booking in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat already has a stored booking or the
    /// write fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::database::{Database, DatabaseConfig};
    /// use seatbook::{BookingRecord, Passenger};
    ///
    /// let mut db = Database::open(DatabaseConfig::volatile()).unwrap();
    /// let record = BookingRecord::new(
    ///     "ABC12345".parse().unwrap(),
    ///     "10B".parse().unwrap(),
    ///     Passenger::new("P1", "Ada", "Lovelace").unwrap(),
    /// );
    /// db.insert_booking(&record).unwrap();
    /// assert!(db.reference_exists(&record.reference).unwrap());
    /// ```
    pub fn insert_booking(&mut self, record: &BookingRecord) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        insert_record(&tx, record)?;
        tx.commit()?;
        Ok(())
    }

    /// Deletes every stored booking for a seat, returning how many went.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_bookings_for_seat(&mut self, seat: SeatId) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let deleted = tx.execute(
            DELETE_BOOKINGS_FOR_SEAT,
            params![i64::from(seat.row()), seat.column().letter().to_string()],
        )?;
        tx.commit()?;
        Ok(deleted)
    }

    /// Returns `true` if any stored booking carries `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reference_exists(&self, reference: &Reference) -> Result<bool> {
        let count: i64 =
            self.conn
                .query_row(CHECK_REFERENCE_EXISTS, [reference.as_str()], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Reads every stored row, ordered by row then column.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(&self) -> Result<Vec<StoredBooking>> {
        let mut stmt = self.conn.prepare(LIST_BOOKINGS)?;
        let rows = stmt
            .query_map([], row_to_stored)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows)
    }

    /// Returns the valid booking stored for a seat, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_booking(&self, seat: SeatId) -> Result<Option<BookingRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_SEAT)?;
        let rows = stmt
            .query_map(
                params![i64::from(seat.row()), seat.column().letter().to_string()],
                row_to_stored,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows.iter().find_map(|stored| stored.to_record().ok()))
    }

    /// Returns the valid booking stored under a reference, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_by_reference(&self, reference: &Reference) -> Result<Option<BookingRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_REFERENCE)?;
        let rows = stmt
            .query_map([reference.as_str()], row_to_stored)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows.iter().find_map(|stored| stored.to_record().ok()))
    }

    /// Replays stored bookings onto `inventory`.
    ///
    /// Every row naming a valid, free seat reserves it, so memory agrees with
    /// the store's seat key. Several rows may share one reference. A row whose
    /// reference is missing or malformed gets a fresh one from `references`,
    /// written back to the store; a reference stored in lower case or with
    /// padding is rewritten in canonical form. Rows whose seat cannot be
    /// decoded are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored rows cannot be read or a reference
    /// cannot be rewritten.
    pub fn hydrate(
        &self,
        inventory: &mut SeatInventory,
        references: &mut ReferenceGenerator,
    ) -> Result<HydrationReport> {
        let mut report = HydrationReport::default();

        for stored in self.list_bookings()? {
            let seat = match stored.seat() {
                Ok(seat) => seat,
                Err(e) => {
                    log::warn!("Skipping unreadable booking row {stored:?}: {e}");
                    report.skipped_malformed += 1;
                    continue;
                }
            };

            if !inventory.status(seat).is_free() {
                report.skipped_occupied += 1;
                continue;
            }

            let reference = match stored.reference() {
                Ok(reference) => reference,
                Err(e) => {
                    let fresh = references.next(|candidate| {
                        Ok(inventory.holds_reference(candidate)
                            || self.reference_exists(candidate)?)
                    })?;
                    log::warn!(
                        "Booking for {seat} has no usable reference ({e}); assigned {fresh}"
                    );
                    fresh
                }
            };

            if stored.reference.as_deref() != Some(reference.as_str()) {
                self.conn.execute(
                    REPAIR_REFERENCE,
                    params![reference.as_str(), stored.row, stored.col, stored.reference],
                )?;
                report.repaired_references += 1;
            }

            inventory.reserve(seat, reference);
            report.applied += 1;
        }

        log::debug!(
            "Loaded {} booking(s) from the store ({} occupied, {} unreadable, {} repaired)",
            report.applied,
            report.skipped_occupied,
            report.skipped_malformed,
            report.repaired_references
        );
        Ok(report)
    }
}
