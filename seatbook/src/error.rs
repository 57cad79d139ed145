//! Error types for the seatbook library.
//!
//! This module provides the error hierarchy for all seat booking operations,
//! using `thiserror` for ergonomic error handling.
//!
//! Expected negative outcomes (a seat that is already taken, no adjacent
//! block left on the aircraft) are not errors; they are reported through
//! [`BookingOutcome`](crate::BookingOutcome) and
//! [`GroupOutcome`](crate::GroupOutcome).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a seatbook error.
///
/// # Examples
///
/// ```
/// use seatbook::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the seatbook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The seat code is not digits followed by a single letter.
    #[error("malformed seat code '{input}': expected a row number followed by a letter, e.g. 12C")]
    MalformedCode {
        /// The raw input, as given.
        input: String,
    },

    /// The seat code is well formed but names a row or column that does not exist.
    #[error("seat code '{input}' is outside the valid range (rows 1-80, columns A-F)")]
    OutOfRange {
        /// The normalised input.
        input: String,
    },

    /// The seat is part of the permanent storage area.
    #[error("{seat} is a storage area and cannot be booked")]
    StorageSeat {
        /// The storage seat.
        seat: crate::seat::SeatId,
    },

    /// A group booking asked for a block size other than 2 or 3.
    #[error("unsupported group size {size}: only blocks of 2 or 3 seats can be booked together")]
    UnsupportedGroupSize {
        /// The requested size.
        size: usize,
    },

    /// A booking reference did not have the expected shape.
    #[error("invalid booking reference '{value}': {reason}")]
    InvalidReference {
        /// The rejected value.
        value: String,
        /// The reason it was rejected.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The durable store could not be opened or prepared.
    #[error("booking store unavailable at {}: {source}", path.display())]
    StoreUnavailable {
        /// The store location.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::reference::InvalidReferenceError> for Error {
    fn from(err: crate::reference::InvalidReferenceError) -> Self {
        Self::InvalidReference {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if the error is a local input validation failure.
    ///
    /// Validation failures never touch the inventory or the store, so callers
    /// can report them and carry on.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Error;
    ///
    /// let err = Error::MalformedCode { input: "A1".into() };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MalformedCode { .. }
                | Self::OutOfRange { .. }
                | Self::StorageSeat { .. }
                | Self::UnsupportedGroupSize { .. }
                | Self::InvalidReference { .. }
                | Self::Validation { .. }
        )
    }
}
