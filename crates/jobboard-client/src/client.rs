//! Shared HTTP plumbing: base URL handling, bearer token, status mapping.

use std::fmt;
use std::sync::RwLock;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use jobboard_core::config::ApiConfig;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::AppResult;

use crate::dto::ErrorBody;

/// Client for the JobBoard REST API.
pub struct ApiClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Backend origin, e.g. `http://localhost:5000`.
    base_url: Url,
    /// Bearer token for authenticated calls.
    token: RwLock<Option<String>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid API base URL '{}'", config.base_url),
                e,
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "API base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// Backend origin.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Install the bearer token used by authenticated calls.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    /// Forget the bearer token.
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    /// Build `<base>/api/<segments...>`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                AppError::configuration(format!(
                    "API base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?;
            path.pop_if_empty().push("api").extend(segments);
        }
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url)
    }

    pub(crate) fn patch(&self, url: Url) -> RequestBuilder {
        self.http.patch(url)
    }

    pub(crate) fn delete(&self, url: Url) -> RequestBuilder {
        self.http.delete(url)
    }

    /// Attach the bearer token, failing when no session is installed.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> AppResult<RequestBuilder> {
        match self.token() {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(AppError::authentication("Please log in to continue")),
        }
    }

    /// Send a request, mapping transport failures to fetch errors.
    pub(crate) async fn send(&self, request: RequestBuilder, context: &str) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| transport_error(context, e))?;
        debug!(status = %response.status(), url = %response.url(), "API response");
        Ok(response)
    }

    /// Send a request and decode a successful JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> AppResult<T> {
        let response = self.send(request, context).await?;
        read_json(response, context).await
    }
}

/// Decode a JSON body, mapping non-2xx statuses to typed errors.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> AppResult<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(context, e))?;

    if !status.is_success() {
        return Err(status_error(status, &body, context));
    }

    serde_json::from_slice(&body).map_err(|e| {
        warn!(context, error = %e, "Unexpected response body");
        AppError::with_source(ErrorKind::Fetch, context.to_string(), e)
    })
}

/// Map a transport failure (connect, timeout, body read).
pub(crate) fn transport_error(context: &str, err: reqwest::Error) -> AppError {
    warn!(context, error = %err, "Request failed");
    AppError::with_source(ErrorKind::Fetch, context.to_string(), err)
}

/// Map a non-2xx status to an error, preferring the server's own message.
pub(crate) fn status_error(status: StatusCode, body: &[u8], context: &str) -> AppError {
    let message = server_message(body).unwrap_or_else(|| context.to_string());
    warn!(context, status = status.as_u16(), message = %message, "API error status");

    match status {
        StatusCode::UNAUTHORIZED => AppError::authentication(message),
        StatusCode::FORBIDDEN => AppError::authorization(message),
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::CONFLICT => AppError::conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::validation(message),
        _ => AppError::fetch(message),
    }
}

/// The `message` or `error` field of a JSON error body.
pub(crate) fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_and_encodes() {
        let api = client("http://localhost:5000");
        let url = api.endpoint(&["jobs", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/jobs/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let api = client("http://localhost:5000/");
        let url = api.endpoint(&["my-jobs"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/my-jobs");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_token_lifecycle() {
        let api = client("http://localhost:5000");
        assert!(api.token().is_none());
        api.set_token("abc");
        assert_eq!(api.token().as_deref(), Some("abc"));
        assert!(!format!("{api:?}").contains("abc"));
        api.clear_token();
        assert!(api.token().is_none());
    }

    #[test]
    fn test_status_mapping() {
        let body = br#"{"message":"Job not found"}"#;
        let err = status_error(StatusCode::NOT_FOUND, body, "Failed to fetch job");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Job not found");

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, b"oops", "Failed to fetch jobs");
        assert_eq!(err.kind, ErrorKind::Fetch);
        assert_eq!(err.message, "Failed to fetch jobs");

        let err = status_error(StatusCode::UNAUTHORIZED, br#"{"error":"expired"}"#, "x");
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "expired");
    }
}
