//! User profile, login credentials and session models.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::Role;

/// The user document returned by the login endpoint and persisted locally
/// as `userData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserProfileRecord")]
pub struct UserProfile {
    /// Backend user ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Email address.
    pub email: String,
    /// Raw backend role string (`"user"`, `"employer"`, `"admin"`, ...).
    pub role: Option<String>,
    /// Company name, present for employers.
    #[serde(rename = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// The user document as the backend sends it, with `_id` and `id` kept apart.
#[derive(Deserialize)]
struct UserProfileRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(rename = "companyName", default)]
    company_name: Option<String>,
}

impl From<UserProfileRecord> for UserProfile {
    fn from(r: UserProfileRecord) -> Self {
        Self {
            id: r.mongo_id.or(r.id).unwrap_or_default(),
            email: r.email.unwrap_or_default(),
            role: r.role,
            company_name: r.company_name,
        }
    }
}

/// Login form input.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Email address.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    /// Create credentials from an email/password pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A successful login: the opaque bearer token plus the user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginGrant {
    /// Opaque bearer token.
    pub token: String,
    /// The authenticated user.
    pub user: UserProfile,
}

/// The authenticated identity of the current user.
///
/// Owned by the session store; every other component gets a read-only copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend user ID.
    pub user_id: String,
    /// Email address.
    pub email: String,
    /// Role string exactly as the backend reported it.
    pub raw_role: Option<String>,
    /// Company name, present for employers.
    pub company_name: Option<String>,
    /// Always `true` for a live session.
    pub authenticated: bool,
}

impl Session {
    /// Build an authenticated session from a user profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.id.clone(),
            email: profile.email.clone(),
            raw_role: profile.role.clone(),
            company_name: profile.company_name.clone(),
            authenticated: true,
        }
    }

    /// The normalized application role.
    pub fn role(&self) -> Role {
        Role::normalize(self.raw_role.as_deref())
    }
}
