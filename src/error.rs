//! Error types for the Roster library.
//!
//! All errors are represented by the [`RosterError`] enum. Startup failures
//! (an unreadable record source, a malformed config file) are fatal, while
//! query failures only abort the query that raised them.
//!
//! # Examples
//!
//! ```
//! use roster::error::{RosterError, Result};
//!
//! fn pick(name: &str) -> Result<()> {
//!     Err(RosterError::unsupported_strategy(name))
//! }
//!
//! match pick("SOME") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// I/O errors on the session streams
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The record source could not be opened or read
    #[error("cannot read people from {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Strategy name is not one of ANY, ALL, NONE
    #[error("not provided matching strategy: {0}")]
    UnsupportedStrategy(String),

    /// A NONE query token has no entry in the inverted index
    #[error("token not found in index: {0:?}")]
    MissingIndexKey(String),

    /// The menu option could not be parsed
    #[error("invalid menu option: {0:?}")]
    InvalidOption(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RosterError.
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create a new source unreadable error.
    pub fn source_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        RosterError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a new unsupported strategy error.
    pub fn unsupported_strategy<S: Into<String>>(name: S) -> Self {
        RosterError::UnsupportedStrategy(name.into())
    }

    /// Create a new missing index key error.
    pub fn missing_index_key<S: Into<String>>(token: S) -> Self {
        RosterError::MissingIndexKey(token.into())
    }

    /// Create a new invalid option error.
    pub fn invalid_option<S: Into<String>>(input: S) -> Self {
        RosterError::InvalidOption(input.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RosterError::Config(msg.into())
    }

    /// Whether the error only aborts the current query.
    ///
    /// Recoverable errors send the session back to the menu; everything
    /// else ends it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::UnsupportedStrategy(_)
                | RosterError::MissingIndexKey(_)
                | RosterError::InvalidOption(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RosterError::unsupported_strategy("SOME");
        assert_eq!(error.to_string(), "not provided matching strategy: SOME");

        let error = RosterError::missing_index_key("zzz");
        assert_eq!(error.to_string(), "token not found in index: \"zzz\"");

        let error = RosterError::config("bad field");
        assert_eq!(error.to_string(), "Configuration error: bad field");
    }

    #[test]
    fn test_source_unreadable_display() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file");
        let error = RosterError::source_unreadable("/tmp/missing.txt", io_error);
        assert_eq!(
            error.to_string(),
            "cannot read people from /tmp/missing.txt: No such file"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let roster_error = RosterError::from(io_error);

        match roster_error {
            RosterError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(RosterError::unsupported_strategy("X").is_recoverable());
        assert!(RosterError::missing_index_key("x").is_recoverable());
        assert!(RosterError::invalid_option("abc").is_recoverable());
        assert!(!RosterError::config("x").is_recoverable());
        let json_error = serde_json::from_str::<u32>("x").unwrap_err();
        assert!(!RosterError::from(json_error).is_recoverable());
    }
}
