//! User identity, roles and the authenticated session.

pub mod model;
pub mod role;

pub use model::{Credentials, LoginGrant, Session, UserProfile};
pub use role::Role;
