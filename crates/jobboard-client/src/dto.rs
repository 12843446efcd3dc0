//! Request and response bodies exchanged with the backend.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobboard_entity::{Application, UserProfile};

/// The `{ success, data, message }` wrapper used by the job endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the backend reports success. Absent counts as success.
    #[serde(default)]
    pub success: Option<bool>,
    /// Payload.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Error text on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Whether the envelope reports failure explicitly.
    pub fn failed(&self) -> bool {
        self.success == Some(false)
    }

    /// Server-provided failure text, if any.
    pub fn failure_message(&self) -> Option<String> {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|m| !m.trim().is_empty())
    }
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Email.
    pub email: &'a str,
    /// Password.
    pub password: &'a str,
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the login succeeded.
    #[serde(default)]
    pub success: bool,
    /// Session token.
    #[serde(default)]
    pub token: Option<String>,
    /// Authenticated user.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Failure text.
    #[serde(default)]
    pub error: Option<String>,
    /// Alternate failure text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub password: String,
    /// Role as the backend spells it: `user`, `employer` or `admin`.
    pub role: String,
    /// Company name, employers only.
    #[serde(rename = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Body of `PATCH /api/applications/:id/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate<'a> {
    /// New status value.
    pub status: &'a str,
}

/// Response of `GET /api/jobs/:jobId/applications`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationList {
    /// Applications for the job.
    #[serde(default, alias = "data")]
    pub applications: Vec<Application>,
}

/// A generic error body carrying `message` or `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Message text.
    #[serde(default)]
    pub message: Option<String>,
    /// Error text.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The first non-blank of `message` and `error`.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|m| !m.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_success_flag() {
        let env: Envelope<Vec<serde_json::Value>> =
            serde_json::from_str(r#"{"data":[{"_id":"1"}]}"#).unwrap();
        assert!(!env.failed());
        assert_eq!(env.data.map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_envelope_failure_message() {
        let env: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(env.failed());
        assert_eq!(env.failure_message().as_deref(), Some("nope"));
    }

    #[test]
    fn test_application_list_accepts_data_alias() {
        let list: ApplicationList =
            serde_json::from_str(r#"{"data":[{"_id":"a1","jobId":"j1"}]}"#).unwrap();
        assert_eq!(list.applications.len(), 1);
    }

    #[test]
    fn test_register_request_validation() {
        let req = RegisterRequest {
            email: "bad".to_string(),
            password: "123".to_string(),
            role: "user".to_string(),
            company_name: None,
        };
        assert!(req.validate().is_err());
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("companyName").is_none());
    }
}
