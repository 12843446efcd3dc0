//! # jobboard-core
//!
//! Core crate for JobBoard. Contains configuration schemas, the session
//! domain events, the key-value persistence trait, the ordered term set
//! used by search criteria, and the unified error system.
//!
//! This crate has **no** internal dependencies on other JobBoard crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
