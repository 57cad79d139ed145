//! Search for blocks of adjacent free seats.
//!
//! A block is a run of free seats on the same side of the aisle in a single
//! row. The search scans front to back, left side before right side, so the
//! result for a given inventory is always the same.

use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::layout::SeatLayout;
use crate::seat::SeatId;

/// Smallest block that can be booked together.
pub const MIN_GROUP_SIZE: usize = 2;

/// Largest block that can be booked together (one full side of a row).
pub const MAX_GROUP_SIZE: usize = 3;

/// Finds blocks of adjacent free seats in an inventory.
///
/// # Examples
///
/// ```
/// use seatbook::{AdjacencyFinder, SeatInventory};
///
/// let inventory = SeatInventory::new();
/// let block = AdjacencyFinder::new(&inventory).find_block(3).unwrap().unwrap();
/// let codes: Vec<String> = block.iter().map(ToString::to_string).collect();
/// assert_eq!(codes, ["1A", "1B", "1C"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyFinder<'a> {
    inventory: &'a SeatInventory,
}

impl<'a> AdjacencyFinder<'a> {
    /// Creates a finder over `inventory`.
    #[must_use]
    pub const fn new(inventory: &'a SeatInventory) -> Self {
        Self { inventory }
    }

    /// Finds the first block of `size` adjacent free seats.
    ///
    /// Rows are scanned in ascending order. Within a row the A-C group is
    /// tried before the D-F group, and within a group a window of `size`
    /// seats slides from the window seat towards the aisle. A block never
    /// spans the aisle.
    ///
    /// Returns `Ok(None)` if no such block exists anywhere on the aircraft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedGroupSize`] unless `size` is 2 or 3.
    pub fn find_block(&self, size: usize) -> Result<Option<Vec<SeatId>>> {
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&size) {
            return Err(Error::UnsupportedGroupSize { size });
        }

        for row in 1..=SeatLayout::ROWS {
            for group in &SeatLayout::AISLE_GROUPS {
                for window in group.windows(size) {
                    let seats: Vec<SeatId> = window
                        .iter()
                        .map(|&column| SeatId::from_parts(row, column))
                        .collect();

                    if seats.iter().all(|&seat| self.inventory.status(seat).is_free()) {
                        return Ok(Some(seats));
                    }
                }
            }
        }

        Ok(None)
    }
}
