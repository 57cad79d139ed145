//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `status`: Show whether a seat is available
//! - `book`: Book a single seat
//! - `free`: Cancel the booking on a seat
//! - `book_group`: Book two or three adjacent seats
//! - `chart`: Print the seating chart
//! - `summary`: Count seats by status
//! - `list`: List stored bookings
//! - `lookup`: Find the seat held by a reference
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod book_group;
pub mod chart;
pub mod completions;
pub mod free;
pub mod list;
pub mod lookup;
pub mod status;
pub mod summary;

pub use book::BookCommand;
pub use book_group::BookGroupCommand;
pub use chart::ChartCommand;
pub use completions::CompletionsCommand;
pub use free::FreeCommand;
pub use list::ListCommand;
pub use lookup::LookupCommand;
pub use status::StatusCommand;
pub use summary::SummaryCommand;
