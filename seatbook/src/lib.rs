#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seatbook
//!
//! A library for allocating and persisting seat bookings on a single
//! aircraft with a fixed 80-row, six-abreast layout.
//!
//! This library validates seat codes, tracks each seat's status in memory,
//! finds adjacent blocks for small groups, and keeps every booking in a
//! durable SQLite store that survives restarts and heals itself when opened.
//!
//! ## Core Types
//!
//! - [`SeatId`], [`Column`] and [`normalise`]: Seat identities and code parsing
//! - [`SeatLayout`]: The fixed cabin layout and its storage area
//! - [`SeatInventory`] and [`SeatStatus`]: In-memory seat state
//! - [`AdjacencyFinder`]: Front-to-back search for adjacent free seats
//! - [`BookingService`]: Booking operations kept in step with the store
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use seatbook::{normalise, BookingService, GroupOutcome, Passenger};
//!
//! // Seat codes are trimmed and case-insensitive
//! let seat = normalise(" 12c ").unwrap();
//! assert_eq!(seat.to_string(), "12C");
//!
//! // Book a pair of adjacent seats
//! let mut service = BookingService::open_volatile().unwrap();
//! let party = [
//!     Passenger::new("P1000001", "Ada", "Lovelace").unwrap(),
//!     Passenger::new("P1000002", "Charles", "Babbage").unwrap(),
//! ];
//! let GroupOutcome::Booked(seats) = service.book_group(&party).unwrap() else {
//!     panic!("the cabin is empty");
//! };
//! assert_eq!(seats[0].0.to_string(), "1A");
//! assert_eq!(seats[1].0.to_string(), "1B");
//! ```

pub mod adjacency;
pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod inventory;
pub mod layout;
pub mod logging;
pub mod reference;
pub mod seat;
pub mod service;

// Re-export key types at crate root for convenience
pub use adjacency::AdjacencyFinder;
pub use booking::{BookingOutcome, BookingRecord, GroupOutcome, Passenger};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use inventory::{SeatInventory, SeatStatus, Summary};
pub use layout::SeatLayout;
pub use logging::{init_logger, LogLevel, Logger};
pub use reference::{Reference, ReferenceGenerator};
pub use seat::{normalise, Column, SeatId};
pub use service::BookingService;
