//! Ordered set of search terms.

use serde::{Deserialize, Serialize};

/// An insertion-ordered set of strings.
///
/// Uniqueness is case-sensitive: `"Pune"` and `"pune"` are distinct entries.
/// Order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Remove a term. Returns `false` if it was not present.
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.terms.len();
        self.terms.retain(|t| t != term);
        self.terms.len() != before
    }

    /// Add the term if absent, remove it if present.
    ///
    /// Returns whether the term is present afterwards.
    pub fn toggle(&mut self, term: &str) -> bool {
        if self.remove(term) {
            false
        } else {
            self.terms.push(term.to_string());
            true
        }
    }

    /// Whether the exact term is present.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Remove all terms.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Iterate over terms in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    /// Borrow the terms as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}

impl From<Vec<String>> for TermSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<TermSet> for Vec<String> {
    fn from(set: TermSet) -> Self {
        set.terms
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
