//! Application review status.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of an application. The only field an employer may change.
///
/// Decoding is case-insensitive; any other value becomes `Unknown` so one
/// odd document does not fail a whole list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, not yet reviewed.
    #[default]
    Pending,
    /// Candidate is being interviewed.
    Interviewing,
    /// Candidate accepted.
    Accepted,
    /// Candidate rejected.
    Rejected,
    /// A status this client does not know. Never sent to the backend.
    Unknown,
}

impl ApplicationStatus {
    /// All statuses in workflow order.
    pub const ALL: [ApplicationStatus; 4] = [
        Self::Pending,
        Self::Interviewing,
        Self::Accepted,
        Self::Rejected,
    ];

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Interviewing => "interviewing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or(Self::Unknown),
        })
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = jobboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                jobboard_core::AppError::validation(format!(
                    "Invalid application status: '{s}'. Expected one of: pending, interviewing, accepted, rejected"
                ))
            })
    }
}
