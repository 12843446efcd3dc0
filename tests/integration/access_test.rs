//! Route authorization for real sessions.

use jobboard_auth::{AccessDecision, AuthorizationGate};
use jobboard_auth::rbac::policies::{JOB_DASHBOARD_ROUTE, POST_JOB_ROUTE};
use jobboard_entity::Credentials;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_employer_routes_follow_session() {
    let app = TestApp::new().await;
    let gate = AuthorizationGate::new();

    assert_eq!(
        gate.check_path(app.sessions.session().as_ref(), POST_JOB_ROUTE),
        AccessDecision::RedirectToLogin {
            to: "/login".to_string(),
            from: POST_JOB_ROUTE.to_string(),
        }
    );

    app.sessions
        .login(&Credentials::new("dev@example.com", PASSWORD))
        .await
        .unwrap();
    let seeker = app.sessions.session();
    assert!(matches!(
        gate.check_path(seeker.as_ref(), JOB_DASHBOARD_ROUTE),
        AccessDecision::Deny { .. }
    ));
    assert!(gate.check_path(seeker.as_ref(), "/find-job").is_allowed());

    app.sessions.logout().await;
    app.sessions
        .login(&Credentials::new("boss@example.com", PASSWORD))
        .await
        .unwrap();
    let employer = app.sessions.session();
    assert!(gate.check_path(employer.as_ref(), POST_JOB_ROUTE).is_allowed());
    assert!(
        gate.check_path(employer.as_ref(), "/jobs/j1/applications")
            .is_allowed()
    );
}
