//! Text analysis for records and queries.
//!
//! Tokenization is deliberately naive: text is split on every single space,
//! so consecutive spaces produce empty tokens and those are indexed like any
//! other token. Trailing empty tokens are dropped, except that an empty input
//! yields exactly one empty token.

/// Normalize a line before tokenization.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Normalize a raw query: lowercase and trim the outer whitespace.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Split `text` on single spaces.
///
/// ```
/// use roster::analysis::split_tokens;
///
/// assert_eq!(split_tokens("ann  lee"), vec!["ann", "", "lee"]);
/// assert_eq!(split_tokens("ann lee  "), vec!["ann", "lee"]);
/// assert_eq!(split_tokens(""), vec![""]);
/// ```
pub fn split_tokens(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }

    let mut tokens: Vec<&str> = text.split(' ').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Lowercase a record line and split it into index tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    split_tokens(&normalize(line))
        .into_iter()
        .map(str::to_string)
        .collect()
}
