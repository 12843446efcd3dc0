//! Application operations backed by the HTTP client.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use jobboard_auth::SessionStore;
use jobboard_client::ApiClient;
use jobboard_core::error::AppError;
use jobboard_core::AppResult;
use jobboard_entity::{Application, ApplicationStatus};

use crate::form::ApplicationForm;

/// Submits applications and lets employers review them.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    /// HTTP client.
    api: Arc<ApiClient>,
    /// Session store; source of the bearer token.
    sessions: Arc<SessionStore>,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(api: Arc<ApiClient>, sessions: Arc<SessionStore>) -> Self {
        Self { api, sessions }
    }

    /// Validate and submit an application. No session is required.
    pub async fn submit(&self, form: ApplicationForm) -> AppResult<Option<Application>> {
        let submission = form.into_submission().await?;
        self.api.submit_application(submission).await
    }

    /// Applications received for a posting.
    pub async fn for_job(&self, job_id: &str) -> AppResult<Vec<Application>> {
        self.attach_token()?;
        self.api.job_applications(job_id).await
    }

    /// Change an application's review status.
    pub async fn set_status(&self, application_id: &str, status: ApplicationStatus) -> AppResult<()> {
        self.attach_token()?;
        self.api
            .update_application_status(application_id, status)
            .await
    }

    /// URL that renders a resume inline.
    pub fn resume_view_url(&self, filename: &str) -> AppResult<String> {
        self.api.resume_view_url(resume_name(filename)?)
    }

    /// Download a resume into `dir` as `<email>_resume.pdf`.
    ///
    /// Returns the written path.
    pub async fn download_resume(
        &self,
        filename: &str,
        applicant_email: &str,
        dir: &Path,
    ) -> AppResult<PathBuf> {
        self.attach_token()?;
        let bytes = self.api.download_resume(resume_name(filename)?).await?;

        tokio::fs::create_dir_all(dir).await?;
        let target = dir.join(format!("{applicant_email}_resume.pdf"));
        tokio::fs::write(&target, &bytes).await?;

        info!(path = %target.display(), size = bytes.len(), "Resume downloaded");
        Ok(target)
    }

    fn attach_token(&self) -> AppResult<()> {
        let token = self
            .sessions
            .bearer_token()
            .ok_or_else(|| AppError::authentication("Please log in to continue"))?;
        self.api.set_token(token);
        Ok(())
    }
}

/// Last path segment of a stored resume reference.
fn resume_name(reference: &str) -> AppResult<&str> {
    reference
        .rsplit(['\\', '/'])
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::validation("Resume file name is empty"))
}
