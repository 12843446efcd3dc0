//! Application endpoints: submission, review and resume retrieval.

use std::path::Path;

use bytes::Bytes;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use tracing::info;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::AppResult;
use jobboard_entity::{Application, ApplicationStatus};

use crate::client::{status_error, transport_error, ApiClient};
use crate::dto::{ApplicationList, Envelope, StatusUpdate};

/// Resume file extensions the backend accepts.
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "docx", "doc"];

/// A resume file ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    /// File name sent in the multipart part.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Bytes,
}

impl ResumeUpload {
    /// Read a resume from disk, rejecting unsupported extensions.
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::validation("Please choose a resume file"))?
            .to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !RESUME_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::validation(
                "Resume must be a .pdf, .docx or .doc file",
            ));
        }

        let bytes = tokio::fs::read(path).await?;
        Ok(Self {
            file_name,
            content_type: content_type_for(&extension).to_string(),
            bytes: Bytes::from(bytes),
        })
    }
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Multipart body of `POST /api/applications`.
#[derive(Debug, Clone)]
pub struct ApplicationSubmission {
    /// Posting applied to.
    pub job_id: String,
    /// Applicant email.
    pub email: String,
    /// Normalized LinkedIn URL.
    pub linkedin_url: String,
    /// Resume file.
    pub resume: ResumeUpload,
}

impl ApplicationSubmission {
    fn into_form(self) -> AppResult<Form> {
        let length = self.resume.bytes.len() as u64;
        let part = Part::stream_with_length(self.resume.bytes, length)
            .file_name(self.resume.file_name)
            .mime_str(&self.resume.content_type)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Validation, "Unsupported resume type", e)
            })?;

        Ok(Form::new()
            .text("jobId", self.job_id)
            .text("email", self.email)
            .text("linkedinUrl", self.linkedin_url)
            .part("resume", part))
    }
}

impl ApiClient {
    /// `POST /api/applications` as multipart form data.
    ///
    /// Applying does not require a session.
    pub async fn submit_application(
        &self,
        submission: ApplicationSubmission,
    ) -> AppResult<Option<Application>> {
        let url = self.endpoint(&["applications"])?;
        let job_id = submission.job_id.clone();
        let form = submission.into_form()?;

        let envelope: Envelope<Application> = self
            .send_json(self.post(url).multipart(form), "Failed to submit application")
            .await?;
        if envelope.failed() {
            return Err(AppError::fetch(
                envelope
                    .failure_message()
                    .unwrap_or_else(|| "Failed to submit application".to_string()),
            ));
        }

        info!(job_id = %job_id, "Application submitted");
        Ok(envelope.data)
    }

    /// `GET /api/applications/job/:jobId`. Requires a bearer token.
    pub async fn job_applications(&self, job_id: &str) -> AppResult<Vec<Application>> {
        let url = self.endpoint(&["applications", "job", job_id])?;
        let request = self.authorized(self.get(url))?;
        let list: ApplicationList = self
            .send_json(request, "Failed to fetch applications")
            .await?;
        Ok(list.applications)
    }

    /// `PATCH /api/applications/:id/status`. Requires a bearer token.
    pub async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> AppResult<()> {
        if !ApplicationStatus::ALL.contains(&status) {
            return Err(AppError::validation(format!(
                "Cannot set application status to '{status}'"
            )));
        }
        let url = self.endpoint(&["applications", application_id, "status"])?;
        let body = StatusUpdate {
            status: status.as_str(),
        };
        let request = self.authorized(self.patch(url).json(&body))?;
        let response = self.send(request, "Failed to update status").await?;

        let code = response.status();
        if !code.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| transport_error("Failed to update status", e))?;
            return Err(status_error(code, &bytes, "Failed to update status"));
        }

        info!(application_id, status = %status, "Application status updated");
        Ok(())
    }

    /// URL that renders a resume inline.
    ///
    /// Built locally; opening it is left to the caller.
    pub fn resume_view_url(&self, filename: &str) -> AppResult<String> {
        Ok(self
            .endpoint(&["applications", "resume", "view", filename])?
            .to_string())
    }

    /// `GET /api/applications/resume/download/:filename`. Requires a bearer token.
    pub async fn download_resume(&self, filename: &str) -> AppResult<Bytes> {
        let url = self.endpoint(&["applications", "resume", "download", filename])?;
        let request = self.authorized(self.get(url).header(ACCEPT, "application/octet-stream"))?;
        let response = self.send(request, "Failed to download resume").await?;

        let code = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error("Failed to download resume", e))?;
        if !code.is_success() {
            return Err(status_error(code, &bytes, "Failed to download resume"));
        }
        Ok(bytes)
    }
}

