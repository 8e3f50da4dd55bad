//! Output formatting for the interactive session.

use std::io::Write;

use crate::error::{Result, RosterError};
use crate::store::RecordStore;

pub const MENU_HEADER: &str = "=== menu ===";
pub const MENU_ITEMS: &str = "1. Find a person.\n2. Print all people.\n0. Exit";
pub const STRATEGY_PROMPT: &str = "Select a matching strategy: ALL, ANY, NONE";
pub const QUERY_PROMPT: &str = "Enter a name or email to search all suitable people.";
pub const LIST_HEADER: &str = "=== List of people ===";
pub const FAREWELL: &str = "Bye!";

/// Print the main menu.
pub fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{MENU_HEADER}")?;
    writeln!(out, "{MENU_ITEMS}")?;
    Ok(())
}

/// Print every person in load order.
pub fn write_people<W: Write>(out: &mut W, store: &RecordStore) -> Result<()> {
    writeln!(out, "{LIST_HEADER}")?;
    for person in store.iter() {
        writeln!(out, "{person}")?;
    }
    Ok(())
}

/// Print a query error that sends the session back to the menu.
pub fn write_error<W: Write>(out: &mut W, error: &RosterError) -> Result<()> {
    writeln!(out, "Error: {error}")?;
    Ok(())
}
