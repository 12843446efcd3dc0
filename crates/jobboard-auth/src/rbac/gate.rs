//! The role authorization gate: decides whether a session may view a route.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jobboard_entity::{Role, Session};

use super::policies::{AccessRequirement, RoutePolicies, LOGIN_ROUTE};

/// Outcome of an authorization check.
///
/// Denial is a normal result, not an error: the caller renders the reason
/// in place and keeps its surrounding navigation usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    /// The session may view the route.
    Allow,
    /// No session: send the user to the login page, then back to `from`.
    RedirectToLogin {
        /// The login page path.
        to: String,
        /// The originally requested path.
        from: String,
    },
    /// The session's role is not permitted.
    Deny {
        /// Explanation naming the permitted role(s).
        reason: String,
    },
}

impl AccessDecision {
    /// Whether access is granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Checks sessions against the route table.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationGate {
    /// The route table.
    policies: RoutePolicies,
}

impl AuthorizationGate {
    /// Creates a gate with the default route table.
    pub fn new() -> Self {
        Self {
            policies: RoutePolicies::new(),
        }
    }

    /// Creates a gate with a custom route table.
    pub fn with_policies(policies: RoutePolicies) -> Self {
        Self { policies }
    }

    /// Decide access to a concrete path using the route table.
    ///
    /// Public paths are always allowed.
    pub fn check_path(&self, session: Option<&Session>, path: &str) -> AccessDecision {
        match self.policies.requirement_for(path) {
            Some(requirement) => Self::authorize(session, requirement, path),
            None => AccessDecision::Allow,
        }
    }

    /// Decide access for a session against a requirement.
    ///
    /// Pure function of its inputs. The role is normalized first, so an
    /// absent or unknown role is judged as a job seeker.
    pub fn authorize(
        session: Option<&Session>,
        requirement: &AccessRequirement,
        requested_path: &str,
    ) -> AccessDecision {
        let Some(session) = session.filter(|s| s.authenticated) else {
            return AccessDecision::RedirectToLogin {
                to: LOGIN_ROUTE.to_string(),
                from: requested_path.to_string(),
            };
        };

        let role = session.role();
        let decision = match requirement {
            AccessRequirement::Authenticated => AccessDecision::Allow,
            AccessRequirement::RequiredRole(required) if role == *required => AccessDecision::Allow,
            AccessRequirement::RequiredRole(required) => AccessDecision::Deny {
                reason: required_role_reason(*required),
            },
            AccessRequirement::AllowedRoles(allowed) if allowed.contains(&role) => {
                AccessDecision::Allow
            }
            AccessRequirement::AllowedRoles(allowed) => AccessDecision::Deny {
                reason: allowed_roles_reason(allowed),
            },
        };

        debug!(path = requested_path, role = %role, ?decision, "Route authorization");
        decision
    }
}

fn required_role_reason(required: Role) -> String {
    match required {
        Role::Employer => "This page is restricted to employers only. \
             Please register as an employer to access this feature."
            .to_string(),
        other => format!("This page is restricted to {other} users only."),
    }
}

fn allowed_roles_reason(allowed: &[Role]) -> String {
    let names: Vec<&str> = allowed.iter().map(Role::as_str).collect();
    format!(
        "You don't have permission to access this page. \
         This page is restricted to {} only.",
        names.join(" or ")
    )
}
