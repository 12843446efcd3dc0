//! Durable client-side key-value storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// A small durable string store, the client-side equivalent of browser
/// local storage.
///
/// Implementations live in `jobboard-auth`. Multi-key writes and `clear`
/// must be atomic: readers never observe a token without its profile.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read a single value.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write several values in one atomic update.
    async fn set_many(&self, entries: &[(&str, String)]) -> AppResult<()>;

    /// Remove every stored value.
    async fn clear(&self) -> AppResult<()>;
}
