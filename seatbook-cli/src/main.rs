//! Main entry point for the seatbook CLI.
//!
//! This is the command-line interface for booking seats on a single
//! aircraft. It provides commands for:
//! - `status`, `book`, `free`: Single seat operations
//! - `book-group`: Seat a group of two or three side by side
//! - `chart`, `summary`, `list`, `lookup`: Inspect the cabin and bookings

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = seatbook::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        database: cli.database,
        in_memory: cli.in_memory,
        busy_timeout: cli.busy_timeout,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Status(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Free(cmd) => cmd.execute(&global),
        cli::Command::BookGroup(cmd) => cmd.execute(&global),
        cli::Command::Chart(cmd) => cmd.execute(&global),
        cli::Command::Summary(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Lookup(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
