//! Route-to-requirement mapping definitions.

use serde::{Deserialize, Serialize};

use jobboard_entity::Role;

/// Path of the post-job page.
pub const POST_JOB_ROUTE: &str = "/post-job";
/// Path of the employer dashboard.
pub const JOB_DASHBOARD_ROUTE: &str = "/job-dashboard";
/// Path pattern of a posting's applicant list.
pub const JOB_APPLICATIONS_ROUTE: &str = "/jobs/:jobId/applications";
/// Path of the login page.
pub const LOGIN_ROUTE: &str = "/login";

/// What a route demands of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "roles", rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Any logged-in user.
    Authenticated,
    /// Exactly this role.
    RequiredRole(Role),
    /// Any one of these roles.
    AllowedRoles(Vec<Role>),
}

/// A protected route pattern. Segments starting with `:` match anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRoute {
    /// Path pattern, e.g. `/jobs/:jobId/applications`.
    pub pattern: String,
    /// Requirement for the route.
    pub requirement: AccessRequirement,
}

impl ProtectedRoute {
    /// Whether a concrete path matches this route's pattern.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let pattern: Vec<&str> = segments(&self.pattern).collect();
        let actual: Vec<&str> = segments(path).collect();

        pattern.len() == actual.len()
            && pattern
                .iter()
                .zip(&actual)
                .all(|(p, a)| p.starts_with(':') || p.eq_ignore_ascii_case(a))
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The static route table. Routes not listed are public.
#[derive(Debug, Clone)]
pub struct RoutePolicies {
    /// Protected routes in lookup order.
    routes: Vec<ProtectedRoute>,
}

impl RoutePolicies {
    /// Creates the default route table.
    pub fn new() -> Self {
        let routes = vec![
            ProtectedRoute {
                pattern: POST_JOB_ROUTE.to_string(),
                requirement: AccessRequirement::RequiredRole(Role::Employer),
            },
            ProtectedRoute {
                pattern: JOB_DASHBOARD_ROUTE.to_string(),
                requirement: AccessRequirement::RequiredRole(Role::Employer),
            },
            ProtectedRoute {
                pattern: JOB_APPLICATIONS_ROUTE.to_string(),
                requirement: AccessRequirement::AllowedRoles(vec![Role::Employer, Role::Admin]),
            },
        ];
        Self { routes }
    }

    /// Creates a table from custom routes.
    pub fn with_routes(routes: Vec<ProtectedRoute>) -> Self {
        Self { routes }
    }

    /// The requirement for a path, or `None` if the path is public.
    pub fn requirement_for(&self, path: &str) -> Option<&AccessRequirement> {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .map(|route| &route.requirement)
    }

    /// All protected routes.
    pub fn routes(&self) -> &[ProtectedRoute] {
        &self.routes
    }
}

impl Default for RoutePolicies {
    fn default() -> Self {
        Self::new()
    }
}
