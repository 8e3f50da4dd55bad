//! Startup and session execution for the Roster CLI.

use std::io::{self, BufRead, Write};

use log::info;

use crate::cli::args::RosterArgs;
use crate::cli::session::Session;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::store::RecordStore;

/// Execute the CLI against the process's stdin and stdout.
pub fn execute_command(args: RosterArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), stdout.lock())
}

/// Load the people file, build the index and run an interactive session.
pub fn run<R: BufRead, W: Write>(config: &RosterConfig, input: R, output: W) -> Result<()> {
    let store = RecordStore::load(&config.data_path)?;
    let index = InvertedIndex::build(&store);
    info!(
        "Indexed {} people into {} terms",
        store.len(),
        index.term_count()
    );

    Session::new(&store, &index, config.missing_key, input, output).run()
}
