//! Session lifecycle against the mock backend.

use jobboard_auth::SessionState;
use jobboard_core::ErrorKind;
use jobboard_core::traits::KeyValueStore;
use jobboard_entity::{Credentials, Role};

use crate::helpers::{EMPLOYER_TOKEN, PASSWORD, TestApp};

#[tokio::test]
async fn test_login_persists_token_and_profile() {
    let app = TestApp::new().await;

    let session = app
        .sessions
        .login(&Credentials::new("boss@example.com", PASSWORD))
        .await
        .unwrap();

    assert_eq!(session.role(), Role::Employer);
    assert_eq!(session.company_name.as_deref(), Some("Acme"));
    assert_eq!(app.sessions.bearer_token().as_deref(), Some(EMPLOYER_TOKEN));

    let raw = std::fs::read_to_string(&app.session_path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["token"], EMPLOYER_TOKEN);
    let user: serde_json::Value =
        serde_json::from_str(stored["userData"].as_str().unwrap()).unwrap();
    assert_eq!(user["email"], "boss@example.com");
}

#[tokio::test]
async fn test_rejected_login_leaves_no_session() {
    let app = TestApp::new().await;

    let err = app
        .sessions
        .login(&Credentials::new("boss@example.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "Invalid email or password");
    assert!(!app.sessions.current().is_authenticated());
    assert!(!app.session_path.exists());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let app = TestApp::new().await;
    app.sessions
        .login(&Credentials::new("dev@example.com", PASSWORD))
        .await
        .unwrap();

    let (_, sessions) = app.restart();
    assert!(!sessions.current().is_authenticated());

    let state = sessions.rehydrate().await;
    let session = state.session().unwrap();
    assert_eq!(session.email, "dev@example.com");
    assert_eq!(session.role(), Role::JobSeeker);
    assert!(sessions.bearer_token().is_some());
}

#[tokio::test]
async fn test_corrupt_profile_is_discarded_on_restart() {
    let app = TestApp::new().await;
    std::fs::write(
        &app.session_path,
        r#"{"token":"abc","userData":"{not json"}"#,
    )
    .unwrap();

    let (_, sessions) = app.restart();
    assert_eq!(sessions.rehydrate().await, SessionState::Unauthenticated);
    assert!(sessions.bearer_token().is_none());
    assert!(!app.session_path.exists());
}

#[tokio::test]
async fn test_logout_clears_storage() {
    let app = TestApp::new().await;
    app.sessions
        .login(&Credentials::new("dev@example.com", PASSWORD))
        .await
        .unwrap();
    let mut rx = app.sessions.subscribe();

    app.sessions.logout().await;

    assert!(!rx.borrow_and_update().is_authenticated());
    let storage = jobboard_auth::FileKeyValueStore::new(&app.session_path);
    assert!(storage.get("token").await.unwrap().is_none());
    assert!(storage.get("userData").await.unwrap().is_none());
}
