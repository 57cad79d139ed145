//! In-memory seat inventory.
//!
//! The inventory is the authoritative view of every seat's status while the
//! process runs. It is stored as a flat table indexed by each seat's position
//! in canonical layout order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::SeatLayout;
use crate::reference::Reference;
use crate::seat::SeatId;

/// The status of a single seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reference", rename_all = "lowercase")]
pub enum SeatStatus {
    /// Available for reservation.
    Free,
    /// Permanently unavailable.
    Storage,
    /// Held by the booking with this reference.
    Reserved(Reference),
}

impl SeatStatus {
    /// Returns `true` if the seat can be reserved.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Returns the holding reference, if the seat is reserved.
    #[must_use]
    pub const fn reference(&self) -> Option<&Reference> {
        match self {
            Self::Reserved(reference) => Some(reference),
            _ => None,
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Storage => write!(f, "storage"),
            Self::Reserved(reference) => write!(f, "reserved ({reference})"),
        }
    }
}

/// Seat counts by status.
///
/// `free + reserved + storage` always equals [`SeatLayout::SEAT_COUNT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Seats available for booking.
    pub free: usize,
    /// Seats held by a booking.
    pub reserved: usize,
    /// Permanently unavailable seats.
    pub storage: usize,
}

impl Summary {
    /// Returns the total number of seats counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.free + self.reserved + self.storage
    }
}

/// The status of every seat on the aircraft.
///
/// A new inventory has every seat free except the storage area. Only
/// [`reserve`](Self::reserve) and [`release`](Self::release) change a status,
/// and neither ever touches a storage seat.
///
/// # Examples
///
/// ```
/// use seatbook::{Reference, SeatInventory, SeatStatus};
///
/// let mut inventory = SeatInventory::new();
/// let seat = "3A".parse().unwrap();
/// let reference: Reference = "AAAA1111".parse().unwrap();
///
/// assert!(inventory.reserve(seat, reference.clone()));
/// assert!(!inventory.reserve(seat, reference.clone()));
/// assert_eq!(inventory.status(seat), &SeatStatus::Reserved(reference.clone()));
/// assert_eq!(inventory.release(seat), Some(reference));
/// assert_eq!(inventory.release(seat), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInventory {
    seats: Vec<SeatStatus>,
}

impl SeatInventory {
    /// Creates an inventory from the static layout rule.
    #[must_use]
    pub fn new() -> Self {
        let seats = SeatLayout::all_seats()
            .map(|seat| {
                if seat.is_storage() {
                    SeatStatus::Storage
                } else {
                    SeatStatus::Free
                }
            })
            .collect();
        Self { seats }
    }

    /// Returns the status of a seat. No validation is performed.
    #[must_use]
    pub fn status(&self, seat: SeatId) -> &SeatStatus {
        &self.seats[SeatLayout::index_of(seat)]
    }

    /// Reserves a free seat under `reference`.
    ///
    /// Returns `false`, leaving the seat untouched, if it is not free.
    pub fn reserve(&mut self, seat: SeatId, reference: Reference) -> bool {
        let slot = &mut self.seats[SeatLayout::index_of(seat)];
        if slot.is_free() {
            *slot = SeatStatus::Reserved(reference);
            true
        } else {
            false
        }
    }

    /// Frees a reserved seat, returning the reference that held it.
    ///
    /// Returns `None` if the seat was already free or is storage.
    pub fn release(&mut self, seat: SeatId) -> Option<Reference> {
        let slot = &mut self.seats[SeatLayout::index_of(seat)];
        match std::mem::replace(slot, SeatStatus::Free) {
            SeatStatus::Reserved(reference) => Some(reference),
            previous => {
                *slot = previous;
                None
            }
        }
    }

    /// Returns `true` if any seat is held by `reference`.
    #[must_use]
    pub fn holds_reference(&self, reference: &Reference) -> bool {
        self.find_reference(reference).is_some()
    }

    /// Returns the seat held by `reference`, if any.
    #[must_use]
    pub fn find_reference(&self, reference: &Reference) -> Option<SeatId> {
        self.iter()
            .find(|(_, status)| status.reference() == Some(reference))
            .map(|(seat, _)| seat)
    }

    /// Counts seats by status.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.seats
            .iter()
            .fold(Summary::default(), |mut summary, status| {
                match status {
                    SeatStatus::Free => summary.free += 1,
                    SeatStatus::Reserved(_) => summary.reserved += 1,
                    SeatStatus::Storage => summary.storage += 1,
                }
                summary
            })
    }

    /// Iterates over every seat and its status in canonical layout order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &SeatStatus)> + '_ {
        SeatLayout::all_seats().zip(self.seats.iter())
    }

    /// Copies every status in canonical layout order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SeatStatus> {
        self.seats.clone()
    }
}

impl Default for SeatInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(text: &str) -> Reference {
        text.parse().unwrap()
    }

    fn seat(code: &str) -> SeatId {
        code.parse().unwrap()
    }

    #[test]
    fn test_new_inventory_summary() {
        let inventory = SeatInventory::new();
        assert_eq!(
            inventory.summary(),
            Summary {
                free: 474,
                reserved: 0,
                storage: 6,
            }
        );
        assert_eq!(inventory.summary().total(), SeatLayout::SEAT_COUNT);
    }

    #[test]
    fn test_storage_is_never_reserved_or_released() {
        let mut inventory = SeatInventory::new();
        let storage = seat("78F");

        assert!(!inventory.reserve(storage, reference("AAAAAAAA")));
        assert_eq!(inventory.status(storage), &SeatStatus::Storage);
        assert_eq!(inventory.release(storage), None);
        assert_eq!(inventory.status(storage), &SeatStatus::Storage);
    }

    #[test]
    fn test_reserve_does_not_overwrite() {
        let mut inventory = SeatInventory::new();
        let s = seat("10B");

        assert!(inventory.reserve(s, reference("FIRST111")));
        assert!(!inventory.reserve(s, reference("SECOND22")));
        assert_eq!(inventory.status(s).reference(), Some(&reference("FIRST111")));
    }

    #[test]
    fn test_release_free_seat() {
        let mut inventory = SeatInventory::new();
        assert_eq!(inventory.release(seat("1A")), None);
        assert!(inventory.status(seat("1A")).is_free());
    }

    #[test]
    fn test_find_reference() {
        let mut inventory = SeatInventory::new();
        inventory.reserve(seat("40E"), reference("LOOKUP12"));

        assert_eq!(inventory.find_reference(&reference("LOOKUP12")), Some(seat("40E")));
        assert!(inventory.holds_reference(&reference("LOOKUP12")));
        assert!(!inventory.holds_reference(&reference("MISSING1")));
    }

    #[test]
    fn test_iter_matches_layout_order() {
        let inventory = SeatInventory::new();
        let seats: Vec<SeatId> = inventory.iter().map(|(s, _)| s).collect();
        let layout: Vec<SeatId> = SeatLayout::all_seats().collect();
        assert_eq!(seats, layout);
    }

    #[test]
    fn test_snapshot_reflects_reservations() {
        let mut inventory = SeatInventory::new();
        let before = inventory.snapshot();
        inventory.reserve(seat("2C"), reference("SNAP0001"));

        let after = inventory.snapshot();
        assert_eq!(after.len(), SeatLayout::SEAT_COUNT);
        assert_ne!(before, after);
        assert_eq!(after[SeatLayout::index_of(seat("2C"))], SeatStatus::Reserved(reference("SNAP0001")));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SeatStatus::Free.to_string(), "free");
        assert_eq!(SeatStatus::Storage.to_string(), "storage");
        assert_eq!(
            SeatStatus::Reserved(reference("ABC12345")).to_string(),
            "reserved (ABC12345)"
        );
    }
}
