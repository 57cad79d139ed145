//! CLI structure definitions using clap.

use crate::commands::{
    BookCommand, BookGroupCommand, ChartCommand, CompletionsCommand, FreeCommand, ListCommand,
    LookupCommand, StatusCommand, SummaryCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Book seats on a single aircraft.
#[derive(Parser)]
#[command(name = "seatbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SEATBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use this booking store instead of the one in the data directory
    #[arg(long, value_name = "FILE", global = true, env = "SEATBOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Keep bookings in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Maximum time to wait for a locked store (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show whether a seat is available
    Status(StatusCommand),

    /// Book a single seat for a passenger
    Book(BookCommand),

    /// Cancel the booking on a seat
    Free(FreeCommand),

    /// Book two or three adjacent seats
    BookGroup(BookGroupCommand),

    /// Print the seating chart
    Chart(ChartCommand),

    /// Count free, reserved and storage seats
    Summary(SummaryCommand),

    /// List stored bookings
    List(ListCommand),

    /// Find the seat held by a booking reference
    Lookup(LookupCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
