//! Job posting endpoints.

use serde_json::Value;
use tracing::info;

use jobboard_core::error::AppError;
use jobboard_core::AppResult;
use jobboard_entity::job::NewJobPosting;
use jobboard_entity::JobPosting;

use crate::client::ApiClient;
use crate::dto::Envelope;

impl ApiClient {
    /// `GET /api/jobs`: every posting, in backend order.
    pub async fn list_jobs(&self) -> AppResult<Vec<JobPosting>> {
        let url = self.endpoint(&["jobs"])?;
        let envelope: Envelope<Vec<JobPosting>> =
            self.send_json(self.get(url), "Failed to fetch jobs").await?;
        unwrap_list(envelope, "Failed to fetch jobs")
    }

    /// `GET /api/jobs/:id`.
    pub async fn get_job(&self, id: &str) -> AppResult<JobPosting> {
        let url = self.endpoint(&["jobs", id])?;
        let envelope: Envelope<JobPosting> = self
            .send_json(self.get(url), "Failed to fetch job details")
            .await?;
        if envelope.failed() {
            return Err(AppError::fetch(
                envelope
                    .failure_message()
                    .unwrap_or_else(|| "Failed to fetch job details".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| AppError::not_found(format!("Job '{id}' not found")))
    }

    /// `POST /api/jobs`. Requires a bearer token.
    ///
    /// Returns the created posting when the backend echoes it back.
    pub async fn create_job(&self, job: &NewJobPosting) -> AppResult<Option<JobPosting>> {
        let url = self.endpoint(&["jobs"])?;
        let request = self.authorized(self.post(url).json(job))?;
        let envelope: Envelope<JobPosting> =
            self.send_json(request, "Error posting job").await?;
        if envelope.failed() {
            return Err(AppError::fetch(
                envelope
                    .failure_message()
                    .unwrap_or_else(|| "Error posting job".to_string()),
            ));
        }
        info!(title = %job.title, "Job posted");
        Ok(envelope.data)
    }

    /// `DELETE /api/jobs/:id`. Requires a bearer token.
    pub async fn delete_job(&self, id: &str) -> AppResult<()> {
        let url = self.endpoint(&["jobs", id])?;
        let request = self.authorized(self.delete(url))?;
        let envelope: Envelope<Value> = self.send_json(request, "Failed to delete job").await?;
        if envelope.failed() {
            return Err(AppError::fetch(
                envelope
                    .failure_message()
                    .unwrap_or_else(|| "Failed to delete job".to_string()),
            ));
        }
        info!(job_id = id, "Job deleted");
        Ok(())
    }

    /// `GET /api/my-jobs`: postings owned by the caller. Requires a bearer token.
    ///
    /// A 401 surfaces as an authentication error; the caller ends the
    /// session in response.
    pub async fn my_jobs(&self) -> AppResult<Vec<JobPosting>> {
        let url = self.endpoint(&["my-jobs"])?;
        let request = self.authorized(self.get(url))?;
        let envelope: Envelope<Vec<JobPosting>> =
            self.send_json(request, "Failed to fetch jobs").await?;
        unwrap_list(envelope, "Failed to fetch jobs")
    }

    /// `POST /api/save-jobs`: bulk upload of raw job documents.
    ///
    /// Returns the backend's reply verbatim.
    pub async fn import_jobs(&self, jobs: &[Value]) -> AppResult<Value> {
        let url = self.endpoint(&["save-jobs"])?;
        let mut request = self.post(url).json(jobs);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        let reply: Value = self.send_json(request, "Upload failed").await?;
        info!(count = jobs.len(), "Jobs uploaded");
        Ok(reply)
    }
}

fn unwrap_list(envelope: Envelope<Vec<JobPosting>>, context: &str) -> AppResult<Vec<JobPosting>> {
    if envelope.failed() {
        return Err(AppError::fetch(
            envelope
                .failure_message()
                .unwrap_or_else(|| context.to_string()),
        ));
    }
    Ok(envelope.data.unwrap_or_default())
}
