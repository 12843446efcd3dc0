//! Application domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::ApplicationStatus;
use crate::wire;

/// A candidate's application to a job posting.
///
/// Everything except `status` is fixed at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ApplicationRecord")]
pub struct Application {
    /// Backend ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// The posting applied to.
    #[serde(rename = "jobId")]
    pub job_id: String,
    /// Applicant email.
    #[serde(rename = "email")]
    pub applicant_email: String,
    /// Applicant LinkedIn profile.
    #[serde(rename = "linkedinUrl")]
    pub linkedin_url: String,
    /// Stored resume path as recorded by the backend.
    #[serde(rename = "resume")]
    pub resume_reference: String,
    /// Review status.
    pub status: ApplicationStatus,
    /// Submission time.
    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// The backend's application document.
#[derive(Deserialize)]
struct ApplicationRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "jobId", default)]
    job_id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "linkedinUrl", default)]
    linkedin_url: Option<String>,
    #[serde(default)]
    resume: Option<String>,
    #[serde(default)]
    status: ApplicationStatus,
    #[serde(rename = "submittedAt", default, deserialize_with = "wire::lenient_timestamp")]
    submitted_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt", default, deserialize_with = "wire::lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<ApplicationRecord> for Application {
    fn from(r: ApplicationRecord) -> Self {
        Self {
            id: r.mongo_id.or(r.id).unwrap_or_default(),
            job_id: r.job_id.unwrap_or_default(),
            applicant_email: r.email.unwrap_or_default(),
            linkedin_url: r.linkedin_url.unwrap_or_default(),
            resume_reference: r.resume.unwrap_or_default(),
            status: r.status,
            submitted_at: r.submitted_at.or(r.created_at),
        }
    }
}

impl Application {
    /// The resume file name, i.e. the last segment of the stored path.
    ///
    /// The backend may record Windows-style paths, so both separators count.
    pub fn resume_filename(&self) -> Option<&str> {
        self.resume_reference
            .rsplit(['\\', '/'])
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Suggested local file name for a downloaded resume.
    pub fn download_name(&self) -> String {
        format!("{}_resume.pdf", self.applicant_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_resume(path: &str) -> Application {
        serde_json::from_value(serde_json::json!({
            "_id": "a1",
            "jobId": "j1",
            "email": "dev@example.com",
            "resume": path,
        }))
        .unwrap()
    }

    #[test]
    fn test_resume_filename_windows_path() {
        let app = with_resume("uploads\\resumes\\cv-123.pdf");
        assert_eq!(app.resume_filename(), Some("cv-123.pdf"));
    }

    #[test]
    fn test_resume_filename_unix_path() {
        let app = with_resume("uploads/resumes/cv-456.pdf");
        assert_eq!(app.resume_filename(), Some("cv-456.pdf"));
    }

    #[test]
    fn test_resume_filename_missing() {
        let app = with_resume("");
        assert_eq!(app.resume_filename(), None);
    }

    #[test]
    fn test_defaults_to_pending() {
        let app = with_resume("cv.pdf");
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.download_name(), "dev@example.com_resume.pdf");
    }

    #[test]
    fn test_document_with_virtual_id_and_both_timestamps() {
        let apps: Vec<Application> = serde_json::from_str(
            r#"[{
                "_id":"a1","id":"a1","jobId":"j1","email":"x@y.z",
                "submittedAt":"2024-03-02T10:00:00.000Z",
                "createdAt":"2024-03-01T10:00:00.000Z",
                "status":"reviewed"
            }]"#,
        )
        .unwrap();

        assert_eq!(apps[0].id, "a1");
        assert_eq!(apps[0].status, ApplicationStatus::Unknown);
        let submitted = DateTime::parse_from_rfc3339("2024-03-02T10:00:00Z").unwrap();
        assert_eq!(apps[0].submitted_at, Some(submitted.with_timezone(&Utc)));
    }

    #[test]
    fn test_created_at_fills_submission_time() {
        let app: Application =
            serde_json::from_str(r#"{"id":"a2","createdAt":"2024-03-01T10:00:00.000Z"}"#).unwrap();
        assert_eq!(app.id, "a2");
        assert!(app.submitted_at.is_some());
    }
}
