//! Lookup command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;

/// Find the seat held by a booking reference.
#[derive(Args)]
pub struct LookupCommand {
    /// Booking reference (case-insensitive)
    #[arg(value_name = "REFERENCE")]
    pub reference: String,
}

impl LookupCommand {
    /// Execute the lookup command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        match service.lookup(&self.reference)? {
            Some(seat) => {
                println!("{seat}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No booking with reference {}",
                self.reference.trim().to_uppercase()
            ))),
        }
    }
}
