//! Status command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use seatbook::SeatStatus;

/// Show whether a seat is available.
#[derive(Args)]
pub struct StatusCommand {
    /// Seat code, e.g. 12C
    #[arg(value_name = "SEAT")]
    pub seat: String,
}

impl StatusCommand {
    /// Execute the status command.
    ///
    /// Prints `AVAILABLE` or `RESERVED <reference>`.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        match service.check_status(&self.seat)? {
            SeatStatus::Free => println!("AVAILABLE"),
            SeatStatus::Reserved(reference) => println!("RESERVED {reference}"),
            // Storage seats are rejected by check_status.
            SeatStatus::Storage => println!("STORAGE"),
        }

        Ok(())
    }
}
