//! Roster CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use roster::cli::args::*;
use roster::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = RosterArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
