//! Group booking command implementation.
//!
//! This module implements the `book-group` command, which seats two or three
//! passengers side by side and prints one `SEAT REFERENCE` line each.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, parse_passenger, GlobalOptions};
use clap::Args;
use seatbook::{GroupOutcome, Passenger};

/// Book adjacent seats for a group.
#[derive(Args)]
pub struct BookGroupCommand {
    /// Passenger as PASSPORT:FIRST:LAST (repeat for each member)
    #[arg(
        long = "passenger",
        value_name = "PASSPORT:FIRST:LAST",
        required = true,
        value_parser = parse_passenger
    )]
    pub passengers: Vec<Passenger>,
}

impl BookGroupCommand {
    /// Execute the book-group command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        match service.book_group(&self.passengers)? {
            GroupOutcome::Booked(seats) => {
                for (seat, reference) in seats {
                    println!("{seat} {reference}");
                }
                Ok(())
            }
            GroupOutcome::NoBlockAvailable => Err(CliError::SemanticFailure(format!(
                "No block of {} adjacent seats is available",
                self.passengers.len()
            ))),
        }
    }
}
