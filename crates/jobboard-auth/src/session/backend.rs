//! The authentication endpoint the session store logs in against.

use async_trait::async_trait;

use jobboard_core::AppResult;
use jobboard_entity::{Credentials, LoginGrant};

/// Exchanges credentials for a bearer token and user profile.
///
/// Implemented by the HTTP client in `jobboard-client`. Failures should be
/// authentication errors carrying a message fit for display in the form.
#[async_trait]
pub trait AuthBackend: Send + Sync + 'static {
    /// Perform a single login attempt. No retries.
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginGrant>;
}
