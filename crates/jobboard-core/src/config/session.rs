//! Persisted session configuration.

use serde::{Deserialize, Serialize};

/// Where the session token and user profile are persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the JSON key-value file holding `token` and `userData`.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "data/session.json".to_string()
}
