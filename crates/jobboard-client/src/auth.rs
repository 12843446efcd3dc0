//! Login and registration endpoints.

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use jobboard_auth::AuthBackend;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::AppResult;
use jobboard_entity::{Credentials, LoginGrant};

use crate::client::{server_message, transport_error, ApiClient};
use crate::dto::{LoginRequest, LoginResponse, RegisterRequest};

/// Shown when the backend rejects a login without saying why.
pub const LOGIN_REJECTED: &str = "Incorrect email or password. Please try again.";

/// Shown after a successful registration.
pub const REGISTERED: &str = "Registration successful! Please log in.";

impl ApiClient {
    /// `POST /api/auth/login`.
    ///
    /// The body decides the outcome, not the status code: the backend
    /// answers rejected logins with `{ success: false, error }`.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<LoginGrant> {
        let url = self.endpoint(&["auth", "login"])?;
        let body = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        let response = self.send(self.post(url).json(&body), "Login failed").await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error("Login failed", e))?;

        let parsed: LoginResponse = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::with_source(ErrorKind::Authentication, format!("Login failed ({status})"), e)
        })?;

        match (parsed.success, parsed.token, parsed.user) {
            (true, Some(token), Some(user)) if !token.is_empty() => {
                info!(email = %user.email, "Login accepted");
                Ok(LoginGrant { token, user })
            }
            (true, _, _) => Err(AppError::authentication(
                "Login response did not include a session",
            )),
            (false, _, _) => {
                let message = parsed
                    .error
                    .or(parsed.message)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| LOGIN_REJECTED.to_string());
                Err(AppError::authentication(message))
            }
        }
    }

    /// `POST /api/auth/register`. Returns the confirmation text.
    ///
    /// Any non-2xx answer is an authentication error carrying the server's
    /// message, e.g. an email that is already registered.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<String> {
        request.validate()?;

        let url = self.endpoint(&["auth", "register"])?;
        let response = self
            .send(self.post(url).json(request), "Registration failed")
            .await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error("Registration failed", e))?;

        if !status.is_success() {
            let message =
                server_message(&bytes).unwrap_or_else(|| "Registration failed".to_string());
            return Err(AppError::authentication(message));
        }

        info!(email = %request.email, role = %request.role, "Registered account");
        Ok(REGISTERED.to_string())
    }
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginGrant> {
        ApiClient::login(self, credentials).await
    }
}
