//! Summary command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, resolve_format, GlobalOptions};
use clap::Args;
use seatbook::{OutputFormat, Summary};
use std::io::Write;

const COLUMN_HEADERS: [&str; 4] = ["free", "reserved", "storage", "total"];

/// Count free, reserved and storage seats.
#[derive(Args)]
pub struct SummaryCommand {
    /// Output format (table, json or csv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl SummaryCommand {
    /// Execute the summary command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;
        let summary = service.summary();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match resolve_format(self.format, &config) {
            OutputFormat::Table => {
                let header = COLUMN_HEADERS.map(str::to_uppercase).join("\t");
                writeln!(handle, "{header}")?;
                writeln!(handle, "{}", values(&summary).join("\t"))?;
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "free": summary.free,
                    "reserved": summary.reserved,
                    "storage": summary.storage,
                    "total": summary.total(),
                });
                serde_json::to_writer_pretty(&mut handle, &json)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                writeln!(handle)?;
            }
            OutputFormat::Csv => {
                writeln!(handle, "{}", COLUMN_HEADERS.join(","))?;
                writeln!(handle, "{}", values(&summary).join(","))?;
            }
        }

        Ok(())
    }
}

fn values(summary: &Summary) -> [String; 4] {
    [
        summary.free.to_string(),
        summary.reserved.to_string(),
        summary.storage.to_string(),
        summary.total().to_string(),
    ]
}
