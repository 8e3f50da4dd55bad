//! Inverted index from lowercase tokens to record positions.
//!
//! The index is built once from a [`RecordStore`] and is read-only
//! afterwards. For every record at position `i` and every token `t` produced
//! by [`crate::analysis::tokenize`], `i` is in the posting set of `t`, and
//! every position in a posting set belongs to a record containing the token.

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis;
use crate::store::RecordStore;

/// Set of record positions that contain a token.
pub type PostingSet = AHashSet<usize>;

/// Statistics about an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of records the index was built from.
    pub doc_count: usize,

    /// Number of unique tokens.
    pub term_count: usize,

    /// Number of (token, position) pairs.
    pub posting_count: usize,
}

/// Mapping from token to the set of positions containing it.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, PostingSet>,
    doc_count: usize,
}

impl InvertedIndex {
    /// Build the index over every record in `store`.
    pub fn build(store: &RecordStore) -> Self {
        let mut postings: AHashMap<String, PostingSet> = AHashMap::new();

        for (position, line) in store.iter().enumerate() {
            for token in analysis::tokenize(line) {
                postings.entry(token).or_default().insert(position);
            }
        }

        let index = InvertedIndex {
            postings,
            doc_count: store.len(),
        };

        let stats = index.stats();
        debug!(
            "Built inverted index: {} records, {} terms, {} postings",
            stats.doc_count, stats.term_count, stats.posting_count
        );

        index
    }

    /// Positions of records containing `token`, if any record does.
    pub fn get(&self, token: &str) -> Option<&PostingSet> {
        self.postings.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Iterate over every indexed token, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Iterate over every (token, postings) entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingSet)> {
        self.postings.iter().map(|(t, p)| (t.as_str(), p))
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.values().map(|p| p.len()).sum()
    }

    /// Number of records the index was built from.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count,
            term_count: self.term_count(),
            posting_count: self.posting_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> RecordStore {
        RecordStore::from_lines(["Ann Lee ann@x.com", "Bob Ann bob@x.com"])
    }

    fn sorted(set: &PostingSet) -> Vec<usize> {
        let mut v: Vec<usize> = set.iter().copied().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_build_sample() {
        let index = InvertedIndex::build(&sample_store());

        assert_eq!(sorted(index.get("ann").unwrap()), vec![0, 1]);
        assert_eq!(sorted(index.get("lee").unwrap()), vec![0]);
        assert_eq!(sorted(index.get("bob").unwrap()), vec![1]);
        assert_eq!(sorted(index.get("bob@x.com").unwrap()), vec![1]);
        assert!(index.get("Ann").is_none());
        assert!(!index.contains("zzz"));
    }

    #[test]
    fn test_stats() {
        let index = InvertedIndex::build(&sample_store());
        let stats = index.stats();

        assert_eq!(stats.doc_count, 2);
        // ann, lee, ann@x.com, bob, bob@x.com
        assert_eq!(stats.term_count, 5);
        assert_eq!(stats.posting_count, 6);

        let mut terms: Vec<&str> = index.terms().collect();
        terms.sort_unstable();
        assert_eq!(terms, vec!["ann", "ann@x.com", "bob", "bob@x.com", "lee"]);
    }

    #[test]
    fn test_duplicate_tokens_in_line_collapse() {
        let store = RecordStore::from_lines(["ann ANN Ann"]);
        let index = InvertedIndex::build(&store);

        assert_eq!(index.term_count(), 1);
        assert_eq!(index.posting_count(), 1);
    }

    #[test]
    fn test_empty_tokens_are_keys() {
        let store = RecordStore::from_lines(["ann  lee", "", "bob"]);
        let index = InvertedIndex::build(&store);

        assert_eq!(sorted(index.get("").unwrap()), vec![0, 1]);
    }

    #[test]
    fn test_round_trip_with_tokenization() {
        let store = RecordStore::from_lines([
            "Dwight Joseph djo@gmail.com",
            "Rene Webb webb@gmail.com",
            "Katie Jacobs",
            "Erick Harrington harrington@gmail.com",
            "Myrtle Medina",
            "Erick Burgess",
            "",
            "dwight  rene",
        ]);
        let index = InvertedIndex::build(&store);

        for (position, line) in store.iter().enumerate() {
            for token in analysis::tokenize(line) {
                assert!(index.get(&token).unwrap().contains(&position));
            }
        }

        for (token, postings) in index.iter() {
            for &position in postings.iter() {
                let line = store.get(position).unwrap();
                assert!(analysis::tokenize(line).iter().any(|t| t == token));
            }
        }
    }

    #[test]
    fn test_empty_store() {
        let index = InvertedIndex::build(&RecordStore::default());
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.doc_count(), 0);
    }
}
