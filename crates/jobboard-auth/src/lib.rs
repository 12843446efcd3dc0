//! # jobboard-auth
//!
//! Identity and access control for the JobBoard client.
//!
//! ## Modules
//!
//! - `session`: the session store (login, logout, rehydration) and the
//!   durable key-value stores it persists to
//! - `rbac`: the route table and the role authorization gate

pub mod rbac;
pub mod session;

pub use rbac::{AccessDecision, AccessRequirement, AuthorizationGate, RoutePolicies};
pub use session::{
    AuthBackend, FileKeyValueStore, MemoryKeyValueStore, SessionState, SessionStore,
};
