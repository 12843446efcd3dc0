//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application roles used for route protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses postings and applies. The least-privileged role.
    #[serde(rename = "jobseeker")]
    JobSeeker,
    /// Posts jobs and manages their applicants.
    Employer,
    /// Platform administrator.
    Admin,
}

/// Backend role strings and the application role each one maps to.
///
/// The backend calls job seekers `"user"`.
const ROLE_MAP: [(&str, Role); 3] = [
    ("user", Role::JobSeeker),
    ("employer", Role::Employer),
    ("admin", Role::Admin),
];

impl Role {
    /// Normalize a raw backend role string.
    ///
    /// Matching is case-insensitive. An absent or unrecognized role maps to
    /// [`Role::JobSeeker`], so an unknown value never gains privileges.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::JobSeeker;
        };
        let raw = raw.trim().to_lowercase();
        ROLE_MAP
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, role)| *role)
            .unwrap_or(Self::JobSeeker)
    }

    /// The value the registration endpoint expects for this role.
    pub fn registration_value(&self) -> &'static str {
        match self {
            Self::JobSeeker => "user",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobSeeker => "jobseeker",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = jobboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jobseeker" | "user" => Ok(Self::JobSeeker),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            _ => Err(jobboard_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: jobseeker, employer, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_roles() {
        assert_eq!(Role::normalize(Some("user")), Role::JobSeeker);
        assert_eq!(Role::normalize(Some("Employer")), Role::Employer);
        assert_eq!(Role::normalize(Some("ADMIN")), Role::Admin);
    }

    #[test]
    fn test_normalize_falls_back_to_jobseeker() {
        assert_eq!(Role::normalize(None), Role::JobSeeker);
        assert_eq!(Role::normalize(Some("superuser")), Role::JobSeeker);
        assert_eq!(Role::normalize(Some("")), Role::JobSeeker);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("employer".parse::<Role>().unwrap(), Role::Employer);
        assert_eq!("user".parse::<Role>().unwrap(), Role::JobSeeker);
        assert!("owner".parse::<Role>().is_err());
    }
}
