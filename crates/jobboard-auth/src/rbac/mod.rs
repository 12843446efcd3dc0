//! Role-based route authorization.

pub mod gate;
pub mod policies;

pub use gate::{AccessDecision, AuthorizationGate};
pub use policies::{AccessRequirement, ProtectedRoute, RoutePolicies};
