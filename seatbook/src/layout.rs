//! Static facts about the airframe.
//!
//! The aircraft has 80 rows of six seats, split by a single aisle between
//! columns C and D. Seats D-F in rows 77 and 78 are permanently given over to
//! storage.

use std::ops::RangeInclusive;

use crate::seat::{Column, SeatId};

/// The fixed seat layout of the aircraft.
///
/// # Examples
///
/// ```
/// use seatbook::{Column, SeatLayout};
///
/// assert!(SeatLayout::is_storage(77, Column::D));
/// assert!(!SeatLayout::is_storage(77, Column::C));
///
/// let seats: Vec<_> = SeatLayout::all_seats().take(7).map(|s| s.to_string()).collect();
/// assert_eq!(seats, ["1A", "1B", "1C", "1D", "1E", "1F", "2A"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatLayout;

impl SeatLayout {
    /// Number of rows; rows are numbered from 1.
    pub const ROWS: u8 = 80;

    /// Number of seats in each row.
    pub const SEATS_PER_ROW: usize = Column::ALL.len();

    /// Total number of seats, storage included.
    pub const SEAT_COUNT: usize = Self::ROWS as usize * Self::SEATS_PER_ROW;

    /// Rows that contain storage seats.
    pub const STORAGE_ROWS: RangeInclusive<u8> = 77..=78;

    /// Columns that are storage within [`Self::STORAGE_ROWS`].
    pub const STORAGE_COLUMNS: [Column; 3] = [Column::D, Column::E, Column::F];

    /// The two sides of the aisle, each in left-to-right order.
    pub const AISLE_GROUPS: [[Column; 3]; 2] = [
        [Column::A, Column::B, Column::C],
        [Column::D, Column::E, Column::F],
    ];

    /// Returns `true` if `row` exists on the aircraft.
    #[must_use]
    pub const fn contains_row(row: u8) -> bool {
        row >= 1 && row <= Self::ROWS
    }

    /// Returns `true` if the seat at (`row`, `column`) is permanently unusable.
    #[must_use]
    pub fn is_storage(row: u8, column: Column) -> bool {
        Self::STORAGE_ROWS.contains(&row) && Self::STORAGE_COLUMNS.contains(&column)
    }

    /// Returns an iterator over every seat in canonical order.
    ///
    /// Rows ascend from 1 to 80; within a row, columns run A to F. Chart
    /// rendering and the adjacent-block search both depend on this order.
    #[must_use]
    pub fn all_seats() -> AllSeats {
        AllSeats { next: 0 }
    }

    /// Packs a seat into its position in canonical order.
    pub(crate) const fn index_of(seat: SeatId) -> usize {
        (seat.row() as usize - 1) * Self::SEATS_PER_ROW + seat.column().index()
    }

    /// Inverse of [`Self::index_of`]; `index` must be below [`Self::SEAT_COUNT`].
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn seat_at(index: usize) -> SeatId {
        let row = (index / Self::SEATS_PER_ROW) as u8 + 1;
        let column = Column::ALL[index % Self::SEATS_PER_ROW];
        SeatId::from_parts(row, column)
    }
}

/// Iterator over all seats in canonical order.
#[derive(Debug, Clone)]
pub struct AllSeats {
    next: usize,
}

impl Iterator for AllSeats {
    type Item = SeatId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < SeatLayout::SEAT_COUNT {
            let seat = SeatLayout::seat_at(self.next);
            self.next += 1;
            Some(seat)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SeatLayout::SEAT_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AllSeats {
    fn len(&self) -> usize {
        self.size_hint().0
    }
}
