//! Job operations backed by the HTTP client.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};

use jobboard_auth::SessionStore;
use jobboard_client::ApiClient;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::AppResult;
use jobboard_entity::JobPosting;

use super::listing::JobListing;
use super::sort::sort_newest_first;
use crate::form::JobPostForm;

/// Loads, posts and deletes job postings.
#[derive(Debug, Clone)]
pub struct JobService {
    /// HTTP client.
    api: Arc<ApiClient>,
    /// Session store; source of the bearer token.
    sessions: Arc<SessionStore>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(api: Arc<ApiClient>, sessions: Arc<SessionStore>) -> Self {
        Self { api, sessions }
    }

    /// Fetch every posting into `listing`. Returns the visible count.
    ///
    /// The listing lock is not held across the request, so a newer refresh
    /// may start meanwhile; the older response is then discarded, and a
    /// discarded failure is not reported.
    pub async fn refresh(&self, listing: &Mutex<JobListing>) -> AppResult<usize> {
        let ticket = listing.lock().await.begin_fetch();
        let result = self.api.list_jobs().await;
        let failure = result.as_ref().err().cloned();

        let mut listing = listing.lock().await;
        let applied = listing.complete_fetch(ticket, result);
        match failure {
            Some(e) if applied => Err(e),
            _ => Ok(listing.visible().len()),
        }
    }

    /// Fetch one posting.
    pub async fn get(&self, id: &str) -> AppResult<JobPosting> {
        self.api.get_job(id).await
    }

    /// Validate and publish a new posting.
    pub async fn post(&self, form: JobPostForm) -> AppResult<Option<JobPosting>> {
        let payload = form.into_payload()?;
        self.attach_token();
        self.end_session_on_401(self.api.create_job(&payload).await)
            .await
    }

    /// Delete a posting owned by the caller.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.attach_token();
        self.end_session_on_401(self.api.delete_job(id).await).await
    }

    /// Postings owned by the caller, newest first.
    ///
    /// A rejected token ends the session.
    pub async fn my_jobs(&self) -> AppResult<Vec<JobPosting>> {
        self.attach_token();
        let mut jobs = self.end_session_on_401(self.api.my_jobs().await).await?;
        sort_newest_first(&mut jobs);
        info!(count = jobs.len(), "Loaded own postings");
        Ok(jobs)
    }

    /// Bulk-upload raw job documents read from a JSON array file.
    pub async fn import(&self, raw: &str) -> AppResult<Value> {
        let documents: Vec<Value> = serde_json::from_str(raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Validation,
                "Import file must contain a JSON array of jobs",
                e,
            )
        })?;
        if documents.is_empty() {
            return Err(AppError::validation("Import file contains no jobs"));
        }
        self.attach_token();
        self.api.import_jobs(&documents).await
    }

    fn attach_token(&self) {
        match self.sessions.bearer_token() {
            Some(token) => self.api.set_token(token),
            None => self.api.clear_token(),
        }
    }

    async fn end_session_on_401<T>(&self, result: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &result {
            if e.kind == ErrorKind::Authentication && self.sessions.bearer_token().is_some() {
                warn!(error = %e, "Token rejected; ending session");
                self.sessions.logout().await;
                self.api.clear_token();
            }
        }
        result
    }
}
