//! Job browsing and employer job management.

use std::sync::atomic::Ordering;

use tokio::sync::Mutex;

use jobboard_core::ErrorKind;
use jobboard_entity::Credentials;
use jobboard_service::{JobListing, JobPostForm, JobService, SearchCriteria};

use crate::helpers::{PASSWORD, TestApp};

fn service(app: &TestApp) -> JobService {
    JobService::new(app.api.clone(), app.sessions.clone())
}

#[tokio::test]
async fn test_refresh_sorts_and_filters() {
    let app = TestApp::new().await;
    let listing = Mutex::new(JobListing::new());

    let visible = service(&app).refresh(&listing).await.unwrap();
    assert_eq!(visible, 3);

    let mut listing = listing.lock().await;
    let ids: Vec<&str> = listing.visible().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, ["j2", "j3", "j1"]);

    listing.apply_criteria(
        &SearchCriteria::new()
            .with_keywords(["engineer"])
            .with_locations(["mumbai"]),
    );
    let ids: Vec<&str> = listing.visible().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, ["j3", "j1"]);

    listing.toggle_employment_type("Internship");
    let ids: Vec<&str> = listing.visible().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, ["j3"]);
    assert_eq!(listing.summary(), "1 job found");
    assert_eq!(app.backend.state.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_jobs() {
    let app = TestApp::new().await;
    let listing = Mutex::new(JobListing::new());
    let jobs = service(&app);
    jobs.refresh(&listing).await.unwrap();

    // Point a second service at a port nothing listens on.
    let dead = std::sync::Arc::new(
        jobboard_client::ApiClient::new(&jobboard_core::config::ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        })
        .unwrap(),
    );
    let err = JobService::new(dead, app.sessions.clone())
        .refresh(&listing)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Fetch);
    let listing = listing.lock().await;
    assert_eq!(listing.all().len(), 3);
    assert!(listing.last_error().is_some());
}

#[tokio::test]
async fn test_superseded_failure_is_not_reported() {
    let app = TestApp::new().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let api = std::sync::Arc::new(
        jobboard_client::ApiClient::new(&jobboard_core::config::ApiConfig {
            base_url: format!("http://{}", listener.local_addr().unwrap()),
            ..Default::default()
        })
        .unwrap(),
    );
    let service = JobService::new(api, app.sessions.clone());
    let listing = std::sync::Arc::new(Mutex::new(JobListing::new()));

    let slow = tokio::spawn({
        let listing = listing.clone();
        async move { service.refresh(&listing).await }
    });

    // The request is in flight once the connection is accepted.
    let (socket, _) = listener.accept().await.unwrap();
    listing.lock().await.begin_fetch();
    drop(socket);

    assert_eq!(slow.await.unwrap().unwrap(), 0);
    assert!(listing.lock().await.last_error().is_none());
}

#[tokio::test]
async fn test_employer_posts_and_sees_own_job() {
    let app = TestApp::new().await;
    app.sessions
        .login(&Credentials::new("boss@example.com", PASSWORD))
        .await
        .unwrap();
    let jobs = service(&app);

    let form = JobPostForm {
        title: "Platform Engineer".to_string(),
        company_name: "Acme".to_string(),
        company_url: "acme.io/".to_string(),
        employment_type: vec!["Full-time".to_string()],
        work_mode: vec!["Remote".to_string()],
        locations: vec!["Pune".to_string()],
        min_price: "10".to_string(),
        max_price: "20".to_string(),
        description: "Run the platform".to_string(),
        ..Default::default()
    };
    let created = jobs.post(form).await.unwrap().unwrap();
    assert_eq!(created.title, "Platform Engineer");
    assert_eq!(created.company_url.as_deref(), Some("https://acme.io"));

    let mine = jobs.my_jobs().await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, created.id);

    jobs.delete(&created.id).await.unwrap();
    assert!(jobs.my_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_post_is_rejected_before_sending() {
    let app = TestApp::new().await;
    let form = JobPostForm {
        title: "Platform Engineer".to_string(),
        company_name: "Acme".to_string(),
        description: "Run the platform".to_string(),
        ..Default::default()
    };

    let err = service(&app).post(form).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Please select at least one employment type");
    assert_eq!(app.backend.state.jobs.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_rejected_token_ends_session() {
    let app = TestApp::new().await;
    app.sessions
        .login(&Credentials::new("dev@example.com", PASSWORD))
        .await
        .unwrap();

    let err = service(&app).my_jobs().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(!app.sessions.current().is_authenticated());
    assert!(app.api.token().is_none());
    assert!(!app.session_path.exists());
}

#[tokio::test]
async fn test_import_saves_documents() {
    let app = TestApp::new().await;
    let raw = r#"[{"jobTitle":"Ops"},{"jobTitle":"QA"}]"#;

    let reply = service(&app).import(raw).await.unwrap();

    assert_eq!(reply["message"], "2 jobs saved");
    assert_eq!(app.backend.state.jobs.lock().unwrap().len(), 5);

    let err = service(&app).import("{}").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}
