//! Session lifecycle events.

use serde::{Deserialize, Serialize};

/// Events emitted when the current identity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A login succeeded.
    LoggedIn {
        /// The user's email.
        email: String,
        /// The normalized role name.
        role: String,
    },
    /// A persisted session was restored at startup.
    Rehydrated {
        /// The user's email.
        email: String,
    },
    /// Persisted data was unreadable and has been cleared.
    PersistedDataCleared {
        /// Why the data was discarded.
        reason: String,
    },
    /// The user logged out.
    LoggedOut,
}
