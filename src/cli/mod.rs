//! Command Line Interface for Roster.

pub mod args;
pub mod commands;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use session::{MenuOption, Session};
