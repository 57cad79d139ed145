//! Book command implementation.
//!
//! This module implements the `book` command, which reserves one seat for a
//! passenger and prints the new booking reference.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use seatbook::{BookingOutcome, Passenger};

/// Book a single seat.
#[derive(Args)]
pub struct BookCommand {
    /// Seat code, e.g. 12C
    #[arg(value_name = "SEAT")]
    pub seat: String,

    /// Passport number
    #[arg(long, value_name = "PASSPORT")]
    pub passport: String,

    /// Passenger first name
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Passenger last name
    #[arg(long, value_name = "NAME")]
    pub last_name: String,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Validate the passenger before touching the store
        let passenger = Passenger::new(&self.passport, &self.first_name, &self.last_name)?;

        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        match service.book_seat(&self.seat, &passenger)? {
            BookingOutcome::Booked(reference) => {
                println!("{reference}");
                if global.verbose {
                    eprintln!(
                        "Booked {} for {} {}",
                        self.seat.trim().to_uppercase(),
                        passenger.first_name(),
                        passenger.last_name()
                    );
                }
                Ok(())
            }
            BookingOutcome::NotAvailable => Err(CliError::SemanticFailure(format!(
                "Seat {} is not available",
                self.seat.trim().to_uppercase()
            ))),
        }
    }
}
