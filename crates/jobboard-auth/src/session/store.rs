//! The session store: single owner and single writer of the current identity.

use std::sync::{Arc, RwLock};

use tokio::sync::{broadcast, watch};
use tracing::{info, warn};
use validator::Validate;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::events::{DomainEvent, SessionEvent};
use jobboard_core::traits::KeyValueStore;
use jobboard_core::AppResult;
use jobboard_entity::{Credentials, Session, UserProfile};

use super::backend::AuthBackend;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the serialized user profile.
pub const USER_DATA_KEY: &str = "userData";

/// Buffer size of the session event channel.
const EVENT_BUFFER: usize = 16;

/// The identity published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No user is logged in.
    Unauthenticated,
    /// A user is logged in.
    Authenticated(Session),
}

impl SessionState {
    /// The session, if authenticated.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Holds the current session and keeps durable storage in sync with it.
///
/// Consumers receive the store explicitly and observe changes through
/// [`SessionStore::subscribe`].
pub struct SessionStore {
    /// Durable storage for the token and profile.
    storage: Arc<dyn KeyValueStore>,
    /// Login endpoint.
    backend: Arc<dyn AuthBackend>,
    /// Current state; every change is broadcast to receivers.
    state_tx: watch::Sender<SessionState>,
    /// Lifecycle event stream.
    events_tx: broadcast::Sender<DomainEvent>,
    /// Bearer token of the current session.
    token: RwLock<Option<String>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.storage)
            .field("state", &*self.state_tx.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates a store in the unauthenticated state.
    ///
    /// Call [`SessionStore::rehydrate`] once at startup to restore a
    /// persisted session.
    pub fn new(storage: Arc<dyn KeyValueStore>, backend: Arc<dyn AuthBackend>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Unauthenticated);
        let (events_tx, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            storage,
            backend,
            state_tx,
            events_tx,
            token: RwLock::new(None),
        }
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to lifecycle events emitted after this call.
    pub fn subscribe_events(&self) -> broadcast::Receiver<DomainEvent> {
        self.events_tx.subscribe()
    }

    /// A snapshot of the current state.
    pub fn current(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// The current session, if authenticated.
    pub fn session(&self) -> Option<Session> {
        self.state_tx.borrow().session().cloned()
    }

    /// The bearer token of the current session.
    pub fn bearer_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Log in with the given credentials.
    ///
    /// Validates the form input, performs one backend attempt, persists the
    /// token and profile together, and publishes the new session. Any
    /// backend failure is reported as an authentication error.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<Session> {
        credentials.validate()?;

        let grant = self.backend.login(credentials).await.map_err(|e| {
            warn!(email = %credentials.email, error = %e, "Login failed");
            as_auth_error(e)
        })?;

        if grant.token.trim().is_empty() {
            return Err(AppError::authentication("Login failed"));
        }

        let user_data = serde_json::to_string(&grant.user)?;
        self.storage
            .set_many(&[
                (TOKEN_KEY, grant.token.clone()),
                (USER_DATA_KEY, user_data),
            ])
            .await?;

        let session = Session::from_profile(&grant.user);
        self.publish(Some(grant.token), SessionState::Authenticated(session.clone()));
        self.emit(SessionEvent::LoggedIn {
            email: session.email.clone(),
            role: session.role().to_string(),
        });

        info!(email = %session.email, role = %session.role(), "User logged in");
        Ok(session)
    }

    /// Log out, clearing all persisted state unconditionally.
    pub async fn logout(&self) {
        if let Err(e) = self.storage.clear().await {
            warn!(error = %e, "Failed to clear persisted session");
        }
        self.publish(None, SessionState::Unauthenticated);
        self.emit(SessionEvent::LoggedOut);
        info!("User logged out");
    }

    /// Restore the persisted session, if any.
    ///
    /// Unreadable persisted data is treated as no session: storage is
    /// cleared and `Unauthenticated` is returned instead of an error.
    pub async fn rehydrate(&self) -> SessionState {
        match self.read_persisted().await {
            Ok(Some((token, profile))) => {
                let session = Session::from_profile(&profile);
                self.emit(SessionEvent::Rehydrated {
                    email: session.email.clone(),
                });
                info!(email = %session.email, "Restored persisted session");
                self.publish(Some(token), SessionState::Authenticated(session.clone()));
                SessionState::Authenticated(session)
            }
            Ok(None) => {
                self.publish(None, SessionState::Unauthenticated);
                SessionState::Unauthenticated
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable persisted session");
                if let Err(clear_err) = self.storage.clear().await {
                    warn!(error = %clear_err, "Failed to clear persisted session");
                }
                self.emit(SessionEvent::PersistedDataCleared {
                    reason: e.message.clone(),
                });
                self.publish(None, SessionState::Unauthenticated);
                SessionState::Unauthenticated
            }
        }
    }

    async fn read_persisted(&self) -> AppResult<Option<(String, UserProfile)>> {
        let token = self.storage.get(TOKEN_KEY).await?;
        let user_data = self.storage.get(USER_DATA_KEY).await?;

        match (token, user_data) {
            (Some(token), Some(user_data)) if !token.trim().is_empty() => {
                let profile: UserProfile = serde_json::from_str(&user_data).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Session,
                        "Stored user data is not valid JSON",
                        e,
                    )
                })?;
                Ok(Some((token, profile)))
            }
            _ => Ok(None),
        }
    }

    fn publish(&self, token: Option<String>, state: SessionState) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
        self.state_tx.send_replace(state);
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events_tx.send(DomainEvent::new(event));
    }
}

/// Re-labels any login failure as an authentication error, keeping
/// validation errors and existing auth messages as they are.
fn as_auth_error(err: AppError) -> AppError {
    match err.kind {
        ErrorKind::Authentication | ErrorKind::Validation => err,
        _ => AppError::with_source(ErrorKind::Authentication, "Login failed", err),
    }
}
