//! Matching strategies over the inverted index.
//!
//! A query is split on single spaces (see [`crate::analysis::split_tokens`])
//! and each strategy combines the posting sets of the query tokens:
//!
//! - [`MatchStrategy::Any`]: every record of every matched token, in query
//!   order. A record matched by several tokens is listed once per token.
//! - [`MatchStrategy::All`]: intersection of the posting sets of the tokens
//!   present in the index. Absent tokens are skipped.
//! - [`MatchStrategy::None`]: records not matched by any token, in position
//!   order.
//!
//! No strategy orders its output beyond what is stated above; ANY and ALL
//! follow the posting sets' native iteration order.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::analysis::split_tokens;
use crate::config::MissingKeyPolicy;
use crate::error::{Result, RosterError};
use crate::index::{InvertedIndex, PostingSet};
use crate::store::RecordStore;

/// Output when a query matches nothing.
pub const NO_MATCH_MESSAGE: &str = "No matching people found.";

/// The closed set of matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// Union of token matches, duplicates kept.
    Any,
    /// Intersection of token matches.
    All,
    /// Complement of the union of token matches.
    None,
}

impl MatchStrategy {
    pub const ALL_VARIANTS: [MatchStrategy; 3] =
        [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None];

    pub fn name(&self) -> &'static str {
        match self {
            MatchStrategy::Any => "ANY",
            MatchStrategy::All => "ALL",
            MatchStrategy::None => "NONE",
        }
    }

    /// Run this strategy for an already normalized query.
    pub fn matches(
        &self,
        query: &str,
        index: &InvertedIndex,
        store: &RecordStore,
        policy: MissingKeyPolicy,
    ) -> Result<MatchOutcome> {
        let tokens = split_tokens(query);
        debug!("{} query over {} tokens: {:?}", self, tokens.len(), tokens);

        let outcome = match self {
            MatchStrategy::Any => match_any(&tokens, index),
            MatchStrategy::All => match_all(&tokens, index),
            MatchStrategy::None => match_none(&tokens, index, store, policy)?,
        };
        Ok(outcome)
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchStrategy {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "ANY" => Ok(MatchStrategy::Any),
            "ALL" => Ok(MatchStrategy::All),
            "NONE" => Ok(MatchStrategy::None),
            _ => Err(RosterError::unsupported_strategy(s)),
        }
    }
}

/// Result of running a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Rendered as [`NO_MATCH_MESSAGE`].
    NoMatch,
    /// Matched record positions in output order.
    Found(Vec<usize>),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Found(_))
    }

    pub fn positions(&self) -> &[usize] {
        match self {
            MatchOutcome::NoMatch => &[],
            MatchOutcome::Found(positions) => positions,
        }
    }

    /// Format the outcome: each matched record followed by a line break.
    pub fn render(&self, store: &RecordStore) -> String {
        match self {
            MatchOutcome::NoMatch => NO_MATCH_MESSAGE.to_string(),
            MatchOutcome::Found(positions) => {
                let mut out = String::new();
                for line in positions.iter().filter_map(|&p| store.get(p)) {
                    out.push_str(line);
                    out.push('\n');
                }
                out
            }
        }
    }
}

fn match_any(tokens: &[&str], index: &InvertedIndex) -> MatchOutcome {
    let positions: Vec<usize> = tokens
        .iter()
        .filter_map(|token| index.get(token))
        .flat_map(|postings| postings.iter().copied())
        .collect();

    if positions.is_empty() {
        MatchOutcome::NoMatch
    } else {
        MatchOutcome::Found(positions)
    }
}

fn match_all(tokens: &[&str], index: &InvertedIndex) -> MatchOutcome {
    let mut result: Option<PostingSet> = None;

    for postings in tokens.iter().filter_map(|token| index.get(token)) {
        match result.as_mut() {
            None => result = Some(postings.clone()),
            Some(acc) => acc.retain(|p| postings.contains(p)),
        }
    }

    match result {
        Some(acc) if !acc.is_empty() => MatchOutcome::Found(acc.into_iter().collect()),
        _ => MatchOutcome::NoMatch,
    }
}

fn match_none(
    tokens: &[&str],
    index: &InvertedIndex,
    store: &RecordStore,
    policy: MissingKeyPolicy,
) -> Result<MatchOutcome> {
    let mut excluded = PostingSet::new();

    for token in tokens {
        match (index.get(token), policy) {
            (Some(postings), _) => excluded.extend(postings.iter().copied()),
            (None, MissingKeyPolicy::Ignore) => {}
            (None, MissingKeyPolicy::Fail) => return Err(RosterError::missing_index_key(*token)),
        }
    }

    if excluded.len() == store.len() {
        return Ok(MatchOutcome::NoMatch);
    }

    Ok(MatchOutcome::Found(
        (0..store.len()).filter(|p| !excluded.contains(p)).collect(),
    ))
}
