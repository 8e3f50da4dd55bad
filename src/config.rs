//! Runtime configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Default location of the people file.
pub const DEFAULT_DATA_PATH: &str = "people.txt";

/// What the NONE strategy does with a query token that no record contains.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Fail the query with a missing key error.
    #[default]
    Fail,
    /// Treat the token as matching nothing.
    Ignore,
}

/// Configuration for a roster session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Path to the people file, one record per line.
    pub data_path: PathBuf,

    /// Missing token handling for the NONE strategy.
    pub missing_key: MissingKeyPolicy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            missing_key: MissingKeyPolicy::Fail,
        }
    }
}

impl RosterConfig {
    /// Load a configuration from a JSON file. Absent fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RosterError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the data path.
    pub fn with_data_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the missing key policy.
    pub fn with_missing_key(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }
}
