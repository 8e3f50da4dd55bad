//! Finder: a query front-end bound to one matching strategy.

use crate::config::MissingKeyPolicy;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::store::RecordStore;
use crate::strategy::{MatchOutcome, MatchStrategy};

/// Dispatches queries to a strategy chosen at construction.
///
/// ```
/// use roster::finder::Finder;
/// use roster::index::InvertedIndex;
/// use roster::store::RecordStore;
/// use roster::strategy::MatchStrategy;
///
/// let people = RecordStore::from_lines(["Ann Lee ann@x.com", "Bob Ann bob@x.com"]);
/// let index = InvertedIndex::build(&people);
///
/// let finder = Finder::new(MatchStrategy::All);
/// assert_eq!(finder.find("ann bob", &index, &people)?, "Bob Ann bob@x.com\n");
/// # Ok::<(), roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finder {
    strategy: MatchStrategy,
    policy: MissingKeyPolicy,
}

impl Finder {
    /// Create a finder with the default missing key policy.
    pub fn new(strategy: MatchStrategy) -> Self {
        Self::with_policy(strategy, MissingKeyPolicy::default())
    }

    pub fn with_policy(strategy: MatchStrategy, policy: MissingKeyPolicy) -> Self {
        Finder { strategy, policy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// Match positions for `query`. The query must already be normalized.
    pub fn matches(
        &self,
        query: &str,
        index: &InvertedIndex,
        store: &RecordStore,
    ) -> Result<MatchOutcome> {
        self.strategy.matches(query, index, store, self.policy)
    }

    /// Matching records, one per line, or the no-match message.
    pub fn find(&self, query: &str, index: &InvertedIndex, store: &RecordStore) -> Result<String> {
        Ok(self.matches(query, index, store)?.render(store))
    }
}
