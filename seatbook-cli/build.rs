//! Build script for seatbook-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("seatbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book seats on a single aircraft")
        .long_about(
            "Command-line tool for booking, cancelling and inspecting seats on an \
             80-row, six-abreast aircraft",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SEATBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .help("Use this booking store instead of the one in the data directory")
                .value_name("FILE")
                .global(true)
                .env("SEATBOOK_DATABASE"),
        )
        .arg(
            Arg::new("in-memory")
                .long("in-memory")
                .help("Keep bookings in memory only; nothing is written to disk")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Maximum time to wait for a locked store (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .subcommands(vec![
            Command::new("status")
                .about("Show whether a seat is available")
                .long_about("Print AVAILABLE or RESERVED followed by the booking reference"),
            Command::new("book")
                .about("Book a single seat for a passenger")
                .long_about("Reserve one seat and print the new booking reference"),
            Command::new("free")
                .about("Cancel the booking on a seat")
                .long_about("Cancel the booking on a seat; fails if the seat is not reserved"),
            Command::new("book-group")
                .about("Book two or three adjacent seats")
                .long_about(
                    "Seat two or three passengers side by side, never across the aisle, \
                     choosing the frontmost free block",
                ),
            Command::new("chart")
                .about("Print the seating chart")
                .long_about("Print every row with F, R and S glyphs and the aisle marked X"),
            Command::new("summary")
                .about("Count free, reserved and storage seats")
                .long_about("Print seat counts as a table, JSON or CSV"),
            Command::new("list")
                .about("List stored bookings")
                .long_about("List every booking in the store as a table, JSON or CSV"),
            Command::new("lookup")
                .about("Find the seat held by a booking reference")
                .long_about("Print the seat held by a booking reference"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| std::io::Error::other("OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("seatbook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
