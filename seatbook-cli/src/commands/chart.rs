//! Chart command implementation.
//!
//! Renders the whole cabin, one line per row, with the aisle drawn between
//! columns C and D.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use seatbook::{SeatId, SeatLayout, SeatStatus};
use std::fmt::Write as _;
use std::io::Write;

const LEGEND: &str = "F = free, R = reserved, S = storage, X = aisle";

/// Print the seating chart.
#[derive(Args)]
pub struct ChartCommand {
    /// Omit the legend
    #[arg(long)]
    pub no_legend: bool,
}

impl ChartCommand {
    /// Execute the chart command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", render_chart(service.seats()))?;
        if !self.no_legend {
            writeln!(handle)?;
            writeln!(handle, "{LEGEND}")?;
        }
        Ok(())
    }
}

fn glyph(status: &SeatStatus) -> char {
    match status {
        SeatStatus::Free => 'F',
        SeatStatus::Reserved(_) => 'R',
        SeatStatus::Storage => 'S',
    }
}

fn spaced(glyphs: impl Iterator<Item = char>) -> String {
    glyphs.map(String::from).collect::<Vec<_>>().join(" ")
}

/// Render the chart body: a column header, then one line per row.
///
/// `seats` must be in canonical order, as [`seatbook::BookingService::seats`]
/// yields them.
pub fn render_chart<'a>(seats: impl IntoIterator<Item = (SeatId, &'a SeatStatus)>) -> String {
    let [left, right] = SeatLayout::AISLE_GROUPS.map(|group| spaced(group.iter().map(|c| c.letter())));
    let mut out = format!("    {left}     {right}\n");

    let seats: Vec<(SeatId, &SeatStatus)> = seats.into_iter().collect();
    for row in seats.chunks(SeatLayout::SEATS_PER_ROW) {
        let Some(&(first, _)) = row.first() else {
            continue;
        };
        let (left, right) = row.split_at(row.len().min(SeatLayout::AISLE_GROUPS[0].len()));
        let _ = writeln!(
            out,
            "{:>2}  {}  X  {}",
            first.row(),
            spaced(left.iter().map(|(_, status)| glyph(status))),
            spaced(right.iter().map(|(_, status)| glyph(status)))
        );
    }
    out
}
