//! Seat identity types and seat code parsing.
//!
//! This module provides [`SeatId`] and [`Column`], plus [`normalise`], the
//! single entry point that turns user-supplied text such as `" 12c "` into a
//! canonical, bookable seat.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::SeatLayout;

/// A seat column letter.
///
/// Columns A-C sit on the left of the aisle and D-F on the right. The
/// declaration order is the canonical left-to-right order.
///
/// # Examples
///
/// ```
/// use seatbook::Column;
///
/// assert_eq!(Column::from_letter('c'), Some(Column::C));
/// assert_eq!(Column::from_letter('G'), None);
/// assert_eq!(Column::F.letter(), 'F');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// Left window seat.
    A,
    /// Left middle seat.
    B,
    /// Left aisle seat.
    C,
    /// Right aisle seat.
    D,
    /// Right middle seat.
    E,
    /// Right window seat.
    F,
}

impl Column {
    /// All columns in canonical order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Parses a column letter, case-insensitively.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            _ => None,
        }
    }

    /// Returns the upper-case letter for this column.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// Returns the zero-based position of this column within a row.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The identity of one seat: a row (1-80) and a column (A-F).
///
/// A `SeatId` always names a seat that exists on the aircraft, but it may be
/// a storage seat. Use [`normalise`] when the seat is about to be booked or
/// queried on behalf of a user.
///
/// Ordering follows the canonical layout order: row ascending, then column.
///
/// # Examples
///
/// ```
/// use seatbook::{Column, SeatId};
///
/// let seat: SeatId = "12c".parse().unwrap();
/// assert_eq!(seat.row(), 12);
/// assert_eq!(seat.column(), Column::C);
/// assert_eq!(seat.to_string(), "12C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    row: u8,
    column: Column,
}

impl SeatId {
    /// Creates a seat identity from a row number and column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row` is not between 1 and 80.
    pub fn new(row: u8, column: Column) -> Result<Self> {
        if SeatLayout::contains_row(row) {
            Ok(Self { row, column })
        } else {
            Err(Error::OutOfRange {
                input: format!("{row}{column}"),
            })
        }
    }

    /// Builds a seat without checking the row; callers guarantee the range.
    pub(crate) const fn from_parts(row: u8, column: Column) -> Self {
        Self { row, column }
    }

    /// Returns the row number.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column.
    #[must_use]
    pub const fn column(self) -> Column {
        self.column
    }

    /// Returns `true` if this seat is part of the permanent storage area.
    #[must_use]
    pub fn is_storage(self) -> bool {
        SeatLayout::is_storage(self.row, self.column)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl FromStr for SeatId {
    type Err = Error;

    /// Parses a seat code without rejecting storage seats.
    fn from_str(s: &str) -> Result<Self> {
        parse_code(s)
    }
}

impl TryFrom<String> for SeatId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.to_string()
    }
}

/// Normalises a user-supplied seat code into a bookable [`SeatId`].
///
/// Surrounding whitespace is ignored and letters are case-insensitive, so
/// `" 12c "` becomes `12C`. Leading zeros in the row are accepted.
///
/// # Errors
///
/// - [`Error::MalformedCode`] unless the code is one or more digits followed
///   by exactly one letter
/// - [`Error::OutOfRange`] if the row is not 1-80 or the letter is not A-F
/// - [`Error::StorageSeat`] if the seat is in the storage area
///
/// # Examples
///
/// ```
/// use seatbook::{normalise, Error};
///
/// assert_eq!(normalise(" 12c ").unwrap().to_string(), "12C");
/// assert!(matches!(normalise("C12"), Err(Error::MalformedCode { .. })));
/// assert!(matches!(normalise("81A"), Err(Error::OutOfRange { .. })));
/// assert!(matches!(normalise("77E"), Err(Error::StorageSeat { .. })));
/// ```
pub fn normalise(raw: &str) -> Result<SeatId> {
    let seat = parse_code(raw)?;
    if seat.is_storage() {
        return Err(Error::StorageSeat { seat });
    }
    Ok(seat)
}

fn parse_code(raw: &str) -> Result<SeatId> {
    let code = raw.trim().to_uppercase();
    let malformed = || Error::MalformedCode {
        input: raw.to_string(),
    };

    let mut chars = code.chars();
    let letter = chars.next_back().ok_or_else(malformed)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || !letter.is_alphabetic()
    {
        return Err(malformed());
    }

    let out_of_range = || Error::OutOfRange {
        input: code.clone(),
    };

    // A digit run too long for u8 is simply a row that does not exist.
    let row: u8 = digits.parse().map_err(|_| out_of_range())?;
    let column = Column::from_letter(letter).ok_or_else(out_of_range)?;

    SeatId::new(row, column).map_err(|_| out_of_range())
}

#[cfg(test)]
mod proptests;
