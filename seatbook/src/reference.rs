//! Booking references and their generation.
//!
//! A reference is the capability a passenger needs to look up or cancel a
//! booking, so references are drawn from the operating system's secure random
//! source rather than a seeded generator.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Characters a reference may contain.
pub const REFERENCE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a reference.
pub const REFERENCE_LEN: usize = 8;

/// An 8-character booking reference made of `A-Z` and `0-9`.
///
/// # Examples
///
/// ```
/// use seatbook::Reference;
///
/// let reference: Reference = "ABC12345".parse().unwrap();
/// assert_eq!(reference.as_str(), "ABC12345");
///
/// assert!("abc12345".parse::<Reference>().is_err());
/// assert!("ABC1234".parse::<Reference>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Returns the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Reference {
    type Error = InvalidReferenceError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        if value.len() != REFERENCE_LEN {
            return Err(InvalidReferenceError {
                reason: format!("must be exactly {REFERENCE_LEN} characters"),
                value,
            });
        }
        if !value.bytes().all(|b| REFERENCE_ALPHABET.contains(&b)) {
            return Err(InvalidReferenceError {
                reason: "must contain only upper-case letters and digits".into(),
                value,
            });
        }
        Ok(Self(value))
    }
}

impl FromStr for Reference {
    type Err = InvalidReferenceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for malformed references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidReferenceError {
    /// The rejected value.
    pub value: String,
    /// The reason it was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid booking reference '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidReferenceError {}

/// Produces references that are not already in use.
///
/// # Type Parameters
///
/// * `R` - The random source (defaults to [`OsRng`]). Only cryptographically
///   secure generators are accepted.
///
/// # Examples
///
/// ```
/// use seatbook::ReferenceGenerator;
///
/// let mut generator = ReferenceGenerator::new();
/// let reference = generator.next(|_| Ok(false)).unwrap();
/// assert_eq!(reference.as_str().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceGenerator<R: RngCore + CryptoRng = OsRng> {
    rng: R,
}

impl ReferenceGenerator<OsRng> {
    /// Creates a generator backed by the operating system's random source.
    #[must_use]
    pub const fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for ReferenceGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> ReferenceGenerator<R> {
    /// Creates a generator backed by the given random source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one candidate reference, with no collision check.
    pub fn candidate(&mut self) -> Reference {
        let text: String = (0..REFERENCE_LEN)
            .map(|_| char::from(REFERENCE_ALPHABET[self.rng.gen_range(0..REFERENCE_ALPHABET.len())]))
            .collect();
        Reference(text)
    }

    /// Draws references until one is not in use.
    ///
    /// `in_use` is asked about every candidate and should report whether the
    /// reference is already held, in memory or in the durable store.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `in_use`.
    pub fn next<F>(&mut self, mut in_use: F) -> Result<Reference>
    where
        F: FnMut(&Reference) -> Result<bool>,
    {
        loop {
            let candidate = self.candidate();
            if !in_use(&candidate)? {
                return Ok(candidate);
            }
            log::debug!("Reference {candidate} already in use, drawing again");
        }
    }
}
