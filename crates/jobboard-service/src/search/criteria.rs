//! Active search filters.

use serde::{Deserialize, Serialize};

use jobboard_core::types::TermSet;

/// The active keyword, location and employment-type filters.
///
/// An empty group places no constraint on results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Matched against title or description.
    #[serde(default)]
    pub keywords: TermSet,
    /// Matched against job locations.
    #[serde(default)]
    pub locations: TermSet,
    /// Matched against employment types.
    #[serde(default, rename = "employmentTypes")]
    pub employment_types: TermSet,
}

impl SearchCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add keywords.
    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        for keyword in keywords {
            self.keywords.insert(keyword);
        }
        self
    }

    /// Builder: add locations.
    pub fn with_locations<S: Into<String>>(
        mut self,
        locations: impl IntoIterator<Item = S>,
    ) -> Self {
        for location in locations {
            self.locations.insert(location);
        }
        self
    }

    /// Builder: add employment types.
    pub fn with_employment_types<S: Into<String>>(
        mut self,
        types: impl IntoIterator<Item = S>,
    ) -> Self {
        for employment_type in types {
            self.employment_types.insert(employment_type);
        }
        self
    }

    /// Whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.locations.is_empty() && self.employment_types.is_empty()
    }
}
