//! List command implementation.
//!
//! This module implements the `list` command, which displays the bookings
//! held in the durable store in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, resolve_format, GlobalOptions};
use clap::Args;
use seatbook::{BookingRecord, OutputFormat};
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 5] = ["reference", "seat", "passport", "first_name", "last_name"];

/// List stored bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (table, json or csv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let mut bookings = service.bookings()?;
        bookings.sort_by_key(|b| b.seat);

        match resolve_format(self.format, &config) {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => format_as_json(&bookings)?,
            OutputFormat::Csv => format_as_csv(&bookings)?,
        }

        Ok(())
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[BookingRecord]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS.map(str::to_uppercase).join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            booking.reference,
            booking.seat,
            booking.passenger.passport(),
            booking.passenger.first_name(),
            booking.passenger.last_name(),
        )?;
    }

    Ok(())
}

/// Format bookings as JSON.
fn format_as_json(bookings: &[BookingRecord]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = bookings
        .iter()
        .map(|b| {
            serde_json::json!({
                "reference": b.reference.as_str(),
                "seat": b.seat.to_string(),
                "passport": b.passenger.passport(),
                "first_name": b.passenger.first_name(),
                "last_name": b.passenger.last_name(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format bookings as CSV.
fn format_as_csv(bookings: &[BookingRecord]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for booking in bookings {
        let seat = booking.seat.to_string();
        writer
            .write_record([
                booking.reference.as_str(),
                seat.as_str(),
                booking.passenger.passport(),
                booking.passenger.first_name(),
                booking.passenger.last_name(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
