//! Session lifecycle: login, logout, and rehydration from durable storage.

pub mod backend;
pub mod persistence;
pub mod store;

pub use backend::AuthBackend;
pub use persistence::{FileKeyValueStore, MemoryKeyValueStore};
pub use store::{SessionState, SessionStore, TOKEN_KEY, USER_DATA_KEY};
