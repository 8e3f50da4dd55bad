//! Interactive menu loop.
//!
//! The session reads one menu option per line: `1` runs a query (a strategy
//! line followed by a query line), `2` lists everyone, `0` or end of input
//! exits. Query errors are reported and the menu is shown again.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::analysis::normalize_query;
use crate::cli::output::*;
use crate::config::MissingKeyPolicy;
use crate::error::{Result, RosterError};
use crate::finder::Finder;
use crate::index::InvertedIndex;
use crate::store::RecordStore;
use crate::strategy::MatchStrategy;

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Find,
    List,
    Exit,
    /// Any other integer; ignored.
    Unknown(i64),
}

impl MenuOption {
    pub fn parse(input: &str) -> Result<Self> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| RosterError::invalid_option(input.trim()))?;

        Ok(match value {
            1 => MenuOption::Find,
            2 => MenuOption::List,
            0 => MenuOption::Exit,
            other => MenuOption::Unknown(other),
        })
    }
}

/// An interactive session over a loaded store and its index.
pub struct Session<'a, R, W> {
    store: &'a RecordStore,
    index: &'a InvertedIndex,
    policy: MissingKeyPolicy,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        store: &'a RecordStore,
        index: &'a InvertedIndex,
        policy: MissingKeyPolicy,
        input: R,
        output: W,
    ) -> Self {
        Session {
            store,
            index,
            policy,
            input,
            output,
        }
    }

    /// Run the menu loop until `0` or end of input.
    pub fn run(&mut self) -> Result<()> {
        write_menu(&mut self.output)?;

        while let Some(line) = self.next_option_line()? {
            let keep_going = match MenuOption::parse(&line) {
                Ok(MenuOption::Exit) => false,
                Ok(MenuOption::Find) => self.recover(|s| s.find())?,
                Ok(MenuOption::List) => {
                    write_people(&mut self.output, self.store)?;
                    true
                }
                Ok(MenuOption::Unknown(value)) => {
                    debug!("Ignoring menu option {value}");
                    true
                }
                Err(e) => {
                    self.report(&e)?;
                    true
                }
            };

            if !keep_going {
                break;
            }
            write_menu(&mut self.output)?;
            self.output.flush()?;
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the session and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one query. Returns `false` when input ended mid-query.
    fn find(&mut self) -> Result<bool> {
        writeln!(self.output, "{STRATEGY_PROMPT}")?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(false);
        };
        let finder = Finder::with_policy(name.parse::<MatchStrategy>()?, self.policy);

        writeln!(self.output, "{QUERY_PROMPT}")?;
        self.output.flush()?;
        let Some(raw_query) = self.read_line()? else {
            return Ok(false);
        };
        let query = normalize_query(&raw_query);

        let found = finder.find(&query, self.index, self.store)?;
        writeln!(self.output, "{found}")?;
        Ok(true)
    }

    fn recover<F>(&mut self, step: F) -> Result<bool>
    where
        F: FnOnce(&mut Self) -> Result<bool>,
    {
        match step(self) {
            Err(e) if e.is_recoverable() => {
                self.report(&e)?;
                Ok(true)
            }
            other => other,
        }
    }

    fn report(&mut self, error: &RosterError) -> Result<()> {
        warn!("Query aborted: {error}");
        write_error(&mut self.output, error)
    }

    /// Next non-blank line, for menu options.
    fn next_option_line(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.read_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
