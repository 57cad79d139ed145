//! Free command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;

/// Cancel the booking on a seat.
#[derive(Args)]
pub struct FreeCommand {
    /// Seat code, e.g. 12C
    #[arg(value_name = "SEAT")]
    pub seat: String,
}

impl FreeCommand {
    /// Execute the free command.
    ///
    /// A seat that was not reserved is reported as a semantic failure.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;
        let seat = self.seat.trim().to_uppercase();

        if service.free_seat(&self.seat)? {
            if !global.quiet {
                println!("Cancelled booking on {seat}");
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!("Seat {seat} is not reserved")))
        }
    }
}
