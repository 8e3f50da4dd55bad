//! Command line argument parsing for the Roster CLI using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{MissingKeyPolicy, RosterConfig};
use crate::error::Result;

/// Roster - find people in a text file
#[derive(Parser, Debug, Clone)]
#[command(name = "roster")]
#[command(about = "Interactive people finder backed by an inverted index")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct RosterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// People file, one person per line
    #[arg(long = "data", value_name = "PATH", env = "ROSTER_DATA")]
    pub data: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// How NONE queries treat tokens that match no one
    #[arg(long, value_name = "POLICY")]
    pub missing_key: Option<MissingKeyPolicy>,
}

impl RosterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the configuration: defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<RosterConfig> {
        let mut config = match &self.config {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::default(),
        };

        if let Some(data) = &self.data {
            config = config.with_data_path(data);
        }
        if let Some(policy) = self.missing_key {
            config = config.with_missing_key(policy);
        }

        Ok(config)
    }
}
