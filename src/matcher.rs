//! Prefix matching of candidates against a query.
//!
//! Matching is a case-insensitive prefix test. Every result keeps the
//! candidate's original casing and is split at the query length so a view can
//! emphasise the part the user typed:
//!
//! ```rust
//! use bubbletea_typeahead::matcher::{filter, EmptyQueryPolicy, Match};
//!
//! let cities = ["Paris", "Parma", "London"];
//! let matches = filter(&cities, "par", EmptyQueryPolicy::Closed);
//! assert_eq!(matches, vec![Match::new("Par", "is"), Match::new("Par", "ma")]);
//! ```

/// A candidate split into the part matching the query and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Original-case prefix, as long as the query.
    pub highlighted: String,
    /// Everything after the highlighted prefix.
    pub remaining: String,
}

impl Match {
    /// Creates a match from its two segments.
    pub fn new(highlighted: impl Into<String>, remaining: impl Into<String>) -> Self {
        Self {
            highlighted: highlighted.into(),
            remaining: remaining.into(),
        }
    }

    /// The full candidate text.
    pub fn text(&self) -> String {
        let mut s = String::with_capacity(self.highlighted.len() + self.remaining.len());
        s.push_str(&self.highlighted);
        s.push_str(&self.remaining);
        s
    }
}

/// What an empty query produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyQueryPolicy {
    /// No matches; the menu stays closed until something is typed.
    #[default]
    Closed,
    /// Every candidate, with an empty highlighted prefix.
    BrowseAll,
}

/// Reports whether `candidate` starts with `query`, ignoring case.
pub fn is_match(candidate: &str, query: &str) -> bool {
    candidate.to_lowercase().starts_with(&query.to_lowercase())
}

/// Splits `candidate` after `chars` characters.
fn split_at_chars(candidate: &str, chars: usize) -> Match {
    let at = candidate
        .char_indices()
        .nth(chars)
        .map_or(candidate.len(), |(i, _)| i);
    let (head, tail) = candidate.split_at(at);
    Match::new(head, tail)
}

/// Returns the candidates matching `query`, in input order.
pub fn filter<S: AsRef<str>>(candidates: &[S], query: &str, policy: EmptyQueryPolicy) -> Vec<Match> {
    if query.is_empty() {
        return match policy {
            EmptyQueryPolicy::Closed => Vec::new(),
            EmptyQueryPolicy::BrowseAll => candidates
                .iter()
                .map(|c| Match::new("", c.as_ref()))
                .collect(),
        };
    }

    let query_lower = query.to_lowercase();
    let query_chars = query.chars().count();

    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| c.to_lowercase().starts_with(&query_lower))
        .map(|c| split_at_chars(c, query_chars))
        .collect()
}
