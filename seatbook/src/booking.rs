//! Passenger details and durable booking records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reference::Reference;
use crate::seat::SeatId;

/// The passenger a seat is booked for.
///
/// # Examples
///
/// ```
/// use seatbook::Passenger;
///
/// let passenger = Passenger::new(" P1234567 ", "Eva", "Ng").unwrap();
/// assert_eq!(passenger.passport(), "P1234567");
///
/// assert!(Passenger::new("", "Eva", "Ng").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passenger {
    passport: String,
    first_name: String,
    last_name: String,
}

impl Passenger {
    /// Creates a passenger, trimming each field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any field is empty after trimming.
    pub fn new(
        passport: impl AsRef<str>,
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
    ) -> Result<Self> {
        Ok(Self {
            passport: required("passport", passport.as_ref())?,
            first_name: required("first_name", first_name.as_ref())?,
            last_name: required("last_name", last_name.as_ref())?,
        })
    }

    /// Builds a passenger from stored text without validation.
    pub(crate) fn from_stored(passport: String, first_name: String, last_name: String) -> Self {
        Self {
            passport,
            first_name,
            last_name,
        }
    }

    /// Returns the passport number.
    #[must_use]
    pub fn passport(&self) -> &str {
        &self.passport
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "must be non-empty after trimming whitespace".into(),
        });
    }
    Ok(trimmed.to_string())
}

/// One booked seat as kept in the durable store.
///
/// Each record holds exactly one seat, and each reference names exactly one
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The booking reference.
    pub reference: Reference,
    /// The booked seat.
    pub seat: SeatId,
    /// Who the seat is booked for.
    pub passenger: Passenger,
}

impl BookingRecord {
    /// Creates a record.
    #[must_use]
    pub const fn new(reference: Reference, seat: SeatId, passenger: Passenger) -> Self {
        Self {
            reference,
            seat,
            passenger,
        }
    }
}

/// The result of booking a single seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The seat was booked under this reference.
    Booked(Reference),
    /// The seat is already reserved.
    NotAvailable,
}

impl BookingOutcome {
    /// Returns the new reference if the booking succeeded.
    #[must_use]
    pub const fn reference(&self) -> Option<&Reference> {
        match self {
            Self::Booked(reference) => Some(reference),
            Self::NotAvailable => None,
        }
    }
}

/// The result of booking a group of adjacent seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    /// Every passenger was seated; one entry per passenger, in request order.
    Booked(Vec<(SeatId, Reference)>),
    /// No block of the requested size is free anywhere on the aircraft.
    NoBlockAvailable,
}
