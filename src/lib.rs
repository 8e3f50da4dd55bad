//! # Roster
//!
//! An in-memory people finder.
//!
//! People are loaded from a line-oriented text file, indexed by lowercase
//! space-separated tokens, and queried with one of three strategies:
//!
//! - `ANY`: people matching at least one query token
//! - `ALL`: people matching every query token found in the index
//! - `NONE`: people matching no query token
//!
//! ```
//! use roster::prelude::*;
//!
//! let people = RecordStore::from_lines(["Ann Lee ann@x.com", "Bob Ann bob@x.com"]);
//! let index = InvertedIndex::build(&people);
//!
//! let finder = Finder::new(MatchStrategy::None);
//! assert_eq!(finder.find("lee", &index, &people)?, "Bob Ann bob@x.com\n");
//! # Ok::<(), RosterError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod index;
pub mod store;
pub mod strategy;

pub mod prelude {
    pub use crate::config::{MissingKeyPolicy, RosterConfig};
    pub use crate::error::{Result, RosterError};
    pub use crate::finder::Finder;
    pub use crate::index::InvertedIndex;
    pub use crate::store::RecordStore;
    pub use crate::strategy::{MatchOutcome, MatchStrategy, NO_MATCH_MESSAGE};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
