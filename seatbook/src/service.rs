//! The booking service.
//!
//! [`BookingService`] owns the in-memory seat inventory and the durable store
//! and keeps the two in step. Every mutating operation changes memory first
//! and then writes the store; if the write fails, the memory change is undone
//! before the error is returned.

use std::path::PathBuf;

use crate::adjacency::AdjacencyFinder;
use crate::booking::{BookingOutcome, BookingRecord, GroupOutcome, Passenger};
use crate::database::{Database, DatabaseConfig, HydrationReport};
use crate::error::{Error, Result};
use crate::inventory::{SeatInventory, SeatStatus, Summary};
use crate::reference::{Reference, ReferenceGenerator};
use crate::seat::{normalise, SeatId};

/// Seat booking over a durable store.
///
/// All inputs are raw user text; seat codes are normalised and validated on
/// every call. Validation failures are returned as errors and never touch
/// the inventory or the store. A seat that is already taken is a normal
/// outcome, not an error.
///
/// # Examples
///
/// ```
/// use seatbook::{BookingOutcome, BookingService, Passenger, SeatStatus};
///
/// let mut service = BookingService::open_volatile().unwrap();
/// let passenger = Passenger::new("P1234567", "Ada", "Lovelace").unwrap();
///
/// let outcome = service.book_seat(" 12c ", &passenger).unwrap();
/// let reference = outcome.reference().unwrap().clone();
/// assert_eq!(service.check_status("12C").unwrap(), SeatStatus::Reserved(reference));
///
/// assert_eq!(service.book_seat("12C", &passenger).unwrap(), BookingOutcome::NotAvailable);
/// assert!(service.free_seat("12C").unwrap());
/// assert!(!service.free_seat("12C").unwrap());
/// ```
#[derive(Debug)]
pub struct BookingService {
    database: Database,
    inventory: SeatInventory,
    references: ReferenceGenerator,
    hydration: HydrationReport,
}

impl BookingService {
    /// Opens the store described by `config` and loads its bookings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the store cannot be opened or
    /// its rows cannot be read.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let database = Database::open(config)?;
        let mut inventory = SeatInventory::new();
        let mut references = ReferenceGenerator::new();
        let hydration = database
            .hydrate(&mut inventory, &mut references)
            .map_err(|e| Error::StoreUnavailable {
                path: database
                    .config()
                    .path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(":memory:")),
                source: Box::new(e),
            })?;

        Ok(Self {
            database,
            inventory,
            references,
            hydration,
        })
    }

    /// Opens a service backed by a volatile, in-memory store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the in-memory store cannot be
    /// created.
    pub fn open_volatile() -> Result<Self> {
        Self::open(DatabaseConfig::volatile())
    }

    /// Returns the status of a seat.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is not a bookable seat code.
    pub fn check_status(&self, raw: &str) -> Result<SeatStatus> {
        let seat = normalise(raw)?;
        Ok(self.inventory.status(seat).clone())
    }

    /// Books a single seat for `passenger`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is not a bookable seat code, or
    /// the store error if the booking could not be written. In the latter
    /// case the seat is free again when this returns.
    pub fn book_seat(&mut self, raw: &str, passenger: &Passenger) -> Result<BookingOutcome> {
        let seat = normalise(raw)?;
        if !self.inventory.status(seat).is_free() {
            return Ok(BookingOutcome::NotAvailable);
        }

        let reference = self.next_reference()?;
        if !self.inventory.reserve(seat, reference.clone()) {
            return Ok(BookingOutcome::NotAvailable);
        }

        let record = BookingRecord::new(reference.clone(), seat, passenger.clone());
        if let Err(e) = self.database.insert_booking(&record) {
            self.inventory.release(seat);
            log::debug!("Write for {seat} failed, released it again");
            return Err(e);
        }

        log::debug!("Booked {seat} under {reference}");
        Ok(BookingOutcome::Booked(reference))
    }

    /// Cancels the reservation on a seat.
    ///
    /// Returns `true` if the seat was reserved, `false` if it was already
    /// free.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is not a bookable seat code, or
    /// the store error if the stored booking could not be deleted. In the
    /// latter case the seat keeps its reservation.
    pub fn free_seat(&mut self, raw: &str) -> Result<bool> {
        let seat = normalise(raw)?;
        let Some(reference) = self.inventory.release(seat) else {
            return Ok(false);
        };

        match self.database.delete_bookings_for_seat(seat) {
            Ok(deleted) => {
                log::debug!("Freed {seat} (was {reference}, {deleted} stored row(s) removed)");
                Ok(true)
            }
            Err(e) => {
                self.inventory.reserve(seat, reference);
                log::debug!("Delete for {seat} failed, restored its reservation");
                Err(e)
            }
        }
    }

    /// Books an adjacent block of seats, one per passenger.
    ///
    /// Seats are assigned in block order to passengers in request order, and
    /// each seat gets its own reference. The whole block is written in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedGroupSize`] unless there are 2 or 3
    /// passengers, or the store error if the block could not be written. In
    /// the latter case every seat of the block is free again.
    pub fn book_group(&mut self, passengers: &[Passenger]) -> Result<GroupOutcome> {
        let Some(block) = AdjacencyFinder::new(&self.inventory).find_block(passengers.len())?
        else {
            return Ok(GroupOutcome::NoBlockAvailable);
        };

        let mut records = Vec::with_capacity(block.len());
        for (seat, passenger) in block.into_iter().zip(passengers) {
            let reference = match self.next_reference() {
                Ok(reference) => reference,
                Err(e) => {
                    self.release_all(&records);
                    return Err(e);
                }
            };
            self.inventory.reserve(seat, reference.clone());
            records.push(BookingRecord::new(reference, seat, passenger.clone()));
        }

        if let Err(e) = self.database.insert_bookings(&records) {
            self.release_all(&records);
            log::debug!("Write for a block of {} failed, released it again", records.len());
            return Err(e);
        }

        let booked: Vec<(SeatId, Reference)> = records
            .into_iter()
            .map(|record| (record.seat, record.reference))
            .collect();
        log::debug!(
            "Booked block {}",
            booked
                .iter()
                .map(|(seat, reference)| format!("{seat}={reference}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(GroupOutcome::Booked(booked))
    }

    /// Counts seats by status.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.inventory.summary()
    }

    /// Iterates over every seat and its status in canonical layout order.
    pub fn seats(&self) -> impl Iterator<Item = (SeatId, &SeatStatus)> + '_ {
        self.inventory.iter()
    }

    /// Returns the in-memory inventory.
    #[must_use]
    pub const fn inventory(&self) -> &SeatInventory {
        &self.inventory
    }

    /// Returns every valid booking in the store, ordered by seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn bookings(&self) -> Result<Vec<BookingRecord>> {
        Ok(self
            .database
            .list_bookings()?
            .iter()
            .filter_map(|stored| stored.to_record().ok())
            .collect())
    }

    /// Returns the stored booking for a seat, if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is not a bookable seat code, or an
    /// error if the store cannot be read.
    pub fn booking(&self, raw: &str) -> Result<Option<BookingRecord>> {
        let seat = normalise(raw)?;
        self.database.find_booking(seat)
    }

    /// Returns the seat held by a booking reference, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] if `raw` is not a well-formed
    /// reference.
    pub fn lookup(&self, raw: &str) -> Result<Option<SeatId>> {
        let reference: Reference = raw.trim().to_uppercase().parse()?;
        Ok(self.inventory.find_reference(&reference))
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// Returns what loading the stored bookings did.
    #[must_use]
    pub const fn hydration_report(&self) -> HydrationReport {
        self.hydration
    }

    fn next_reference(&mut self) -> Result<Reference> {
        let inventory = &self.inventory;
        let database = &self.database;
        self.references.next(|candidate| {
            Ok(inventory.holds_reference(candidate) || database.reference_exists(candidate)?)
        })
    }

    fn release_all(&mut self, records: &[BookingRecord]) {
        for record in records {
            self.inventory.release(record.seat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SeatLayout;
    use tempfile::tempdir;

    fn passenger(n: u32) -> Passenger {
        Passenger::new(format!("P{n:07}"), format!("First{n}"), format!("Last{n}")).unwrap()
    }

    fn seat(code: &str) -> SeatId {
        code.parse().unwrap()
    }

    #[test]
    fn test_book_then_not_available() {
        let mut service = BookingService::open_volatile().unwrap();

        let first = service.book_seat("5A", &passenger(1)).unwrap();
        assert!(matches!(first, BookingOutcome::Booked(_)));

        let second = service.book_seat("5a", &passenger(2)).unwrap();
        assert_eq!(second, BookingOutcome::NotAvailable);
    }

    #[test]
    fn test_book_free_free() {
        let mut service = BookingService::open_volatile().unwrap();

        assert!(service.book_seat("30F", &passenger(1)).unwrap().reference().is_some());
        assert!(service.free_seat("30F").unwrap());
        assert!(!service.free_seat("30F").unwrap());
        assert_eq!(service.check_status("30F").unwrap(), SeatStatus::Free);
    }

    #[test]
    fn test_validation_errors_leave_state_untouched() {
        let mut service = BookingService::open_volatile().unwrap();
        let before = service.inventory().snapshot();

        assert!(matches!(
            service.book_seat("77D", &passenger(1)),
            Err(Error::StorageSeat { .. })
        ));
        assert!(matches!(
            service.book_seat("81A", &passenger(1)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            service.book_seat("A1", &passenger(1)),
            Err(Error::MalformedCode { .. })
        ));
        assert!(matches!(service.free_seat("78F"), Err(Error::StorageSeat { .. })));
        assert!(matches!(service.check_status("12G"), Err(Error::OutOfRange { .. })));

        assert_eq!(service.inventory().snapshot(), before);
        assert!(service.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_book_group_front_to_back() {
        let mut service = BookingService::open_volatile().unwrap();

        let GroupOutcome::Booked(first) = service
            .book_group(&[passenger(1), passenger(2), passenger(3)])
            .unwrap()
        else {
            panic!("expected a block");
        };
        let seats: Vec<SeatId> = first.iter().map(|(s, _)| *s).collect();
        assert_eq!(seats, [seat("1A"), seat("1B"), seat("1C")]);

        let GroupOutcome::Booked(second) = service
            .book_group(&[passenger(4), passenger(5), passenger(6)])
            .unwrap()
        else {
            panic!("expected a block");
        };
        let seats: Vec<SeatId> = second.iter().map(|(s, _)| *s).collect();
        assert_eq!(seats, [seat("1D"), seat("1E"), seat("1F")]);

        // One distinct reference per seat.
        let mut references: Vec<&Reference> =
            first.iter().chain(second.iter()).map(|(_, r)| r).collect();
        references.sort();
        references.dedup();
        assert_eq!(references.len(), 6);
        assert_eq!(service.bookings().unwrap().len(), 6);
    }

    #[test]
    fn test_book_group_unsupported_size() {
        let mut service = BookingService::open_volatile().unwrap();
        assert!(matches!(
            service.book_group(&[passenger(1)]),
            Err(Error::UnsupportedGroupSize { size: 1 })
        ));
        assert!(matches!(
            service.book_group(&[passenger(1), passenger(2), passenger(3), passenger(4)]),
            Err(Error::UnsupportedGroupSize { size: 4 })
        ));
    }

    #[test]
    fn test_book_group_no_block() {
        let mut service = BookingService::open_volatile().unwrap();
        // Take every B and E seat so no pair is adjacent anywhere.
        for row in 1..=SeatLayout::ROWS {
            service.book_seat(&format!("{row}B"), &passenger(1)).unwrap();
            if row != 77 && row != 78 {
                service.book_seat(&format!("{row}E"), &passenger(1)).unwrap();
            }
        }
        let before = service.summary();

        assert_eq!(
            service.book_group(&[passenger(2), passenger(3)]).unwrap(),
            GroupOutcome::NoBlockAvailable
        );
        assert_eq!(service.summary(), before);
    }

    #[test]
    fn test_book_seat_rolls_back_on_write_failure() {
        let mut service = BookingService::open_volatile().unwrap();
        service
            .database()
            .connection()
            .execute_batch(
                "CREATE TRIGGER fail_insert BEFORE INSERT ON booking
                 BEGIN SELECT RAISE(ABORT, 'injected failure'); END;",
            )
            .unwrap();

        assert!(matches!(
            service.book_seat("9C", &passenger(1)),
            Err(Error::Database(_))
        ));
        assert_eq!(service.check_status("9C").unwrap(), SeatStatus::Free);
        assert_eq!(service.summary().reserved, 0);
    }

    #[test]
    fn test_free_seat_restores_on_delete_failure() {
        let mut service = BookingService::open_volatile().unwrap();
        let reference = service
            .book_seat("14E", &passenger(1))
            .unwrap()
            .reference()
            .unwrap()
            .clone();
        service
            .database()
            .connection()
            .execute_batch(
                "CREATE TRIGGER fail_delete BEFORE DELETE ON booking
                 BEGIN SELECT RAISE(ABORT, 'injected failure'); END;",
            )
            .unwrap();

        assert!(service.free_seat("14E").is_err());
        assert_eq!(
            service.check_status("14E").unwrap(),
            SeatStatus::Reserved(reference)
        );
    }

    #[test]
    fn test_book_group_rolls_back_every_seat() {
        let mut service = BookingService::open_volatile().unwrap();
        // Only the third seat of the block fails to write.
        service
            .database()
            .connection()
            .execute_batch(
                "CREATE TRIGGER fail_third BEFORE INSERT ON booking WHEN NEW.col = 'C'
                 BEGIN SELECT RAISE(ABORT, 'injected failure'); END;",
            )
            .unwrap();

        assert!(service
            .book_group(&[passenger(1), passenger(2), passenger(3)])
            .is_err());
        assert_eq!(service.summary().reserved, 0);
        assert!(service.bookings().unwrap().is_empty());
        for code in ["1A", "1B", "1C"] {
            assert_eq!(service.check_status(code).unwrap(), SeatStatus::Free);
        }
    }

    #[test]
    fn test_lookup() {
        let mut service = BookingService::open_volatile().unwrap();
        let reference = service
            .book_seat("22D", &passenger(7))
            .unwrap()
            .reference()
            .unwrap()
            .clone();

        assert_eq!(service.lookup(reference.as_str()).unwrap(), Some(seat("22D")));
        assert_eq!(
            service.lookup(&reference.as_str().to_lowercase()).unwrap(),
            Some(seat("22D"))
        );
        assert_eq!(service.lookup("ZZZZ9999").unwrap(), None);
        assert!(matches!(service.lookup("short"), Err(Error::InvalidReference { .. })));

        let record = service.booking("22D").unwrap().unwrap();
        assert_eq!(record.passenger, passenger(7));
        assert_eq!(record.reference, reference);
    }

    #[test]
    fn test_reopen_reproduces_inventory() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("seatbook.db"));

        let snapshot = {
            let mut service = BookingService::open(config.clone()).unwrap();
            service.book_seat("3B", &passenger(1)).unwrap();
            service.book_group(&[passenger(2), passenger(3)]).unwrap();
            service.book_seat("60F", &passenger(4)).unwrap();
            service.free_seat("60F").unwrap();
            service.inventory().snapshot()
        };

        let reopened = BookingService::open(config).unwrap();
        assert_eq!(reopened.inventory().snapshot(), snapshot);
        assert_eq!(reopened.hydration_report().applied, 3);
    }
}
