//! The job application form.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobboard_client::{ApplicationSubmission, ResumeUpload};
use jobboard_core::error::AppError;
use jobboard_core::AppResult;

use super::url::normalize_url;

/// Shown when a required field is empty.
const REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Raw application input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ApplicationForm {
    /// Posting applied to.
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub job_id: String,
    /// Applicant email.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// LinkedIn profile as typed.
    pub linkedin_url: String,
    /// Resume file on disk.
    pub resume: Option<PathBuf>,
}

impl ApplicationForm {
    /// Create a form for a posting.
    pub fn new(job_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            email: email.into(),
            linkedin_url: String::new(),
            resume: None,
        }
    }

    /// Check every field without touching the filesystem.
    pub fn check(&self) -> AppResult<()> {
        if self.linkedin_url.trim().is_empty() || self.resume.is_none() {
            return Err(AppError::validation(REQUIRED_FIELDS));
        }
        let trimmed = Self {
            email: self.email.trim().to_string(),
            ..self.clone()
        };
        trimmed.validate()?;
        Ok(())
    }

    /// Validate, load the resume, and build the multipart submission.
    ///
    /// The LinkedIn URL is normalized before sending.
    pub async fn into_submission(self) -> AppResult<ApplicationSubmission> {
        self.check()?;
        let resume_path = self
            .resume
            .ok_or_else(|| AppError::validation(REQUIRED_FIELDS))?;
        let resume = ResumeUpload::from_path(&resume_path).await?;

        Ok(ApplicationSubmission {
            job_id: self.job_id,
            email: self.email.trim().to_string(),
            linkedin_url: normalize_url(&self.linkedin_url),
            resume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::ErrorKind;

    #[test]
    fn test_missing_fields() {
        let form = ApplicationForm::new("j1", "dev@example.com");
        let err = form.check().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, REQUIRED_FIELDS);
    }

    #[test]
    fn test_bad_email() {
        let mut form = ApplicationForm::new("j1", "not-an-email");
        form.linkedin_url = "linkedin.com/in/dev".into();
        form.resume = Some(PathBuf::from("cv.pdf"));
        assert_eq!(
            form.check().unwrap_err().message,
            "Please enter a valid email address"
        );
    }

    #[tokio::test]
    async fn test_submission_normalizes_linkedin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let mut form = ApplicationForm::new("j1", " dev@example.com ");
        form.linkedin_url = " linkedin.com/in/dev/ ".into();
        form.resume = Some(path);

        let submission = form.into_submission().await.unwrap();
        assert_eq!(submission.linkedin_url, "https://linkedin.com/in/dev");
        assert_eq!(submission.email, "dev@example.com");
        assert_eq!(submission.resume.file_name, "cv.pdf");
        assert_eq!(submission.resume.content_type, "application/pdf");
    }

    #[tokio::test]
    async fn test_unsupported_resume_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.exe");
        std::fs::write(&path, b"MZ").unwrap();

        let mut form = ApplicationForm::new("j1", "dev@example.com");
        form.linkedin_url = "linkedin.com/in/dev".into();
        form.resume = Some(path);
        let err = form.into_submission().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
