//! Core trait definitions implemented by other JobBoard crates.

pub mod kv_store;

pub use kv_store::KeyValueStore;
