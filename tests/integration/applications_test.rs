//! Applying to a job and reviewing applications.

use jobboard_core::ErrorKind;
use jobboard_entity::{ApplicationStatus, Credentials};
use jobboard_service::{ApplicationForm, ApplicationService};

use crate::helpers::{PASSWORD, TestApp};

fn service(app: &TestApp) -> ApplicationService {
    ApplicationService::new(app.api.clone(), app.sessions.clone())
}

fn form(app: &TestApp) -> ApplicationForm {
    let resume = app.dir.path().join("cv.pdf");
    std::fs::write(&resume, b"%PDF-1.4").unwrap();
    ApplicationForm {
        linkedin_url: "linkedin.com/in/dev".to_string(),
        resume: Some(resume),
        ..ApplicationForm::new("j1", "dev@example.com")
    }
}

#[tokio::test]
async fn test_apply_then_review() {
    let app = TestApp::new().await;
    let applications = service(&app);

    let submitted = applications.submit(form(&app)).await.unwrap().unwrap();
    assert_eq!(submitted.linkedin_url, "https://linkedin.com/in/dev");
    assert_eq!(submitted.status, ApplicationStatus::Pending);
    assert_eq!(submitted.resume_filename(), Some("cv.pdf"));

    app.sessions
        .login(&Credentials::new("boss@example.com", PASSWORD))
        .await
        .unwrap();

    let received = applications.for_job("j1").await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].applicant_email, "dev@example.com");

    applications
        .set_status(&received[0].id, ApplicationStatus::Interviewing)
        .await
        .unwrap();
    let received = applications.for_job("j1").await.unwrap();
    assert_eq!(received[0].status, ApplicationStatus::Interviewing);

    let out = app.dir.path().join("downloads");
    let path = applications
        .download_resume(&received[0].resume_reference, "dev@example.com", &out)
        .await
        .unwrap();
    assert_eq!(path.file_name().unwrap(), "dev@example.com_resume.pdf");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "%PDF resume cv.pdf");
}

#[tokio::test]
async fn test_missing_resume_is_rejected() {
    let app = TestApp::new().await;
    let form = ApplicationForm {
        resume: None,
        ..form(&app)
    };

    let err = service(&app).submit(form).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Please fill in all required fields");
    assert!(app.backend.state.applications.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_review_requires_session() {
    let app = TestApp::new().await;

    let err = service(&app).for_job("j1").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_view_url_uses_last_path_segment() {
    let app = TestApp::new().await;

    let url = service(&app)
        .resume_view_url("uploads\\resumes\\cv.pdf")
        .unwrap();
    assert_eq!(
        url,
        format!("{}/api/applications/resume/view/cv.pdf", app.backend.base_url)
    );
}
