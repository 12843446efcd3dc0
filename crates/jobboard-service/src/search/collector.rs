//! The search input collector.
//!
//! Tracks pending (typed but unconfirmed) keyword and location text,
//! the committed keyword and location sets, and the location suggestion
//! list. Every change to the committed sets is published to subscribers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use jobboard_core::config::SearchConfig;
use jobboard_core::error::AppError;
use jobboard_core::types::TermSet;

use super::criteria::SearchCriteria;

/// Which committed set a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// A keyword term.
    Keyword,
    /// A location term.
    Location,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Location => write!(f, "location"),
        }
    }
}

impl FromStr for TermKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" | "k" => Ok(Self::Keyword),
            "location" | "l" => Ok(Self::Location),
            other => Err(AppError::validation(format!("Unknown term kind '{other}'"))),
        }
    }
}

/// Collects keyword and location terms and publishes the resulting criteria.
///
/// Published criteria carry only keywords and locations; employment types
/// are owned by the job listing.
pub struct SearchInputCollector {
    /// Reference city list for location suggestions.
    reference_cities: Vec<String>,
    /// Suggestion cap (`0` = unlimited).
    max_suggestions: usize,
    /// Uncommitted keyword text.
    pending_keyword: String,
    /// Uncommitted location text.
    pending_location: String,
    /// Committed keywords.
    keywords: TermSet,
    /// Committed locations.
    locations: TermSet,
    /// Whether the suggestion list is showing.
    suggestions_open: bool,
    /// Criteria publisher.
    criteria_tx: watch::Sender<SearchCriteria>,
}

impl fmt::Debug for SearchInputCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchInputCollector")
            .field("pending_keyword", &self.pending_keyword)
            .field("pending_location", &self.pending_location)
            .field("keywords", &self.keywords)
            .field("locations", &self.locations)
            .field("suggestions_open", &self.suggestions_open)
            .finish_non_exhaustive()
    }
}

impl SearchInputCollector {
    /// Creates a collector using the configured reference cities.
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_cities(config.reference_cities.clone(), config.max_suggestions)
    }

    /// Creates a collector with an explicit city list.
    pub fn with_cities(reference_cities: Vec<String>, max_suggestions: usize) -> Self {
        let (criteria_tx, _) = watch::channel(SearchCriteria::default());
        Self {
            reference_cities,
            max_suggestions,
            pending_keyword: String::new(),
            pending_location: String::new(),
            keywords: TermSet::new(),
            locations: TermSet::new(),
            suggestions_open: false,
            criteria_tx,
        }
    }

    /// Receive every published criteria value.
    pub fn subscribe(&self) -> watch::Receiver<SearchCriteria> {
        self.criteria_tx.subscribe()
    }

    /// The criteria built from the committed sets.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            keywords: self.keywords.clone(),
            locations: self.locations.clone(),
            employment_types: TermSet::new(),
        }
    }

    /// Committed keywords.
    pub fn keywords(&self) -> &TermSet {
        &self.keywords
    }

    /// Committed locations.
    pub fn locations(&self) -> &TermSet {
        &self.locations
    }

    /// Uncommitted keyword text.
    pub fn pending_keyword(&self) -> &str {
        &self.pending_keyword
    }

    /// Uncommitted location text.
    pub fn pending_location(&self) -> &str {
        &self.pending_location
    }

    /// Replace the pending keyword text.
    pub fn set_pending_keyword(&mut self, text: impl Into<String>) {
        self.pending_keyword = text.into();
    }

    /// Replace the pending location text. Typing shows the suggestion list.
    pub fn set_pending_location(&mut self, text: impl Into<String>) {
        self.pending_location = text.into();
        self.suggestions_open = true;
    }

    /// The location field gained focus.
    pub fn focus_location(&mut self) {
        self.suggestions_open = true;
    }

    /// Commit a keyword. Returns whether the committed set changed.
    ///
    /// Text is trimmed; blank and already-present values are ignored.
    /// The pending keyword is cleared either way.
    pub fn commit_keyword(&mut self, text: &str) -> bool {
        self.pending_keyword.clear();
        let added = Self::add_term(&mut self.keywords, text);
        if added {
            self.publish();
        }
        added
    }

    /// Commit a location. Returns whether the committed set changed.
    ///
    /// Same rules as [`Self::commit_keyword`]; also closes the suggestions.
    pub fn commit_location(&mut self, text: &str) -> bool {
        self.pending_location.clear();
        self.suggestions_open = false;
        let added = Self::add_term(&mut self.locations, text);
        if added {
            self.publish();
        }
        added
    }

    /// Commit whatever is pending in the keyword field.
    pub fn commit_pending_keyword(&mut self) -> bool {
        let text = std::mem::take(&mut self.pending_keyword);
        self.commit_keyword(&text)
    }

    /// Commit whatever is pending in the location field.
    pub fn commit_pending_location(&mut self) -> bool {
        let text = std::mem::take(&mut self.pending_location);
        self.commit_location(&text)
    }

    /// Remove a committed term. Returns whether it was present.
    pub fn remove(&mut self, value: &str, kind: TermKind) -> bool {
        let set = match kind {
            TermKind::Keyword => &mut self.keywords,
            TermKind::Location => &mut self.locations,
        };
        let removed = set.remove(value);
        if removed {
            self.publish();
        }
        removed
    }

    /// Run a search: commit both pending fields and publish.
    ///
    /// Publishes even when nothing changed so the caller recomputes.
    pub fn search(&mut self) -> SearchCriteria {
        let keyword = std::mem::take(&mut self.pending_keyword);
        let location = std::mem::take(&mut self.pending_location);
        Self::add_term(&mut self.keywords, &keyword);
        Self::add_term(&mut self.locations, &location);
        self.publish()
    }

    /// Whether the suggestion list is showing.
    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    /// Cities matching the pending location text.
    ///
    /// Empty while the list is closed. With no pending text every city is
    /// offered; otherwise cities containing the text, case-insensitively.
    pub fn suggestions(&self) -> Vec<&str> {
        if !self.suggestions_open {
            return Vec::new();
        }
        let needle = self.pending_location.to_lowercase();
        let matching = self
            .reference_cities
            .iter()
            .filter(|city| needle.is_empty() || city.to_lowercase().contains(&needle))
            .map(String::as_str);

        match self.max_suggestions {
            0 => matching.collect(),
            cap => matching.take(cap).collect(),
        }
    }

    /// Pick a suggestion; same as committing it as a location.
    pub fn select_suggestion(&mut self, city: &str) -> bool {
        self.commit_location(city)
    }

    /// Close the suggestion list explicitly.
    pub fn dismiss_suggestions(&mut self) {
        self.suggestions_open = false;
    }

    /// A pointer interaction landed outside the location field and list.
    pub fn pointer_outside(&mut self) {
        self.suggestions_open = false;
    }

    fn add_term(set: &mut TermSet, text: &str) -> bool {
        let term = text.trim();
        !term.is_empty() && set.insert(term)
    }

    fn publish(&self) -> SearchCriteria {
        let criteria = self.criteria();
        debug!(
            keywords = criteria.keywords.len(),
            locations = criteria.locations.len(),
            "Search criteria changed"
        );
        self.criteria_tx.send_replace(criteria.clone());
        criteria
    }
}
