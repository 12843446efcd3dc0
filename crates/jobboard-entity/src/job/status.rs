//! Job posting status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication status of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Visible and accepting applications.
    #[default]
    Active,
    /// Hidden by the employer.
    Inactive,
    /// No longer accepting applications.
    Closed,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
