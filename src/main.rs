//! # GTG Data Converter CLI
//!
//! This is the binary entry point for the `gtg-convert` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the conversion in the current directory.
//! - Handling top-level errors and translating them into user-friendly
//!   output.
//!
//! The conversion logic lives in the `lib.rs` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
