//! The job listing controller.
//!
//! Holds the most recently accepted job list and the active criteria, and
//! recomputes the visible subset whenever either changes. Fetches are
//! sequenced with tickets: only the response to the newest fetch is
//! applied, so a slow early response never overwrites fresher data.

use tracing::{debug, warn};

use jobboard_core::types::TermSet;
use jobboard_core::AppResult;
use jobboard_entity::JobPosting;

use super::sort::sort_newest_first;
use crate::search::{filter, SearchCriteria};

/// Identifies one job-list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Sequence number of the fetch.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// The job list shown on the find-job page.
#[derive(Debug, Clone, Default)]
pub struct JobListing {
    /// Last accepted list, newest first.
    jobs: Vec<JobPosting>,
    /// Active criteria.
    criteria: SearchCriteria,
    /// Filtered view of `jobs`.
    visible: Vec<JobPosting>,
    /// Sequence number of the newest issued ticket.
    issued: u64,
    /// Whether any fetch has succeeded.
    loaded: bool,
    /// Message of the most recent failed fetch.
    last_error: Option<String>,
}

impl JobListing {
    /// Creates an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Apply the outcome of a fetch. Returns whether it was applied.
    ///
    /// Outcomes for stale tickets are dropped. A failure keeps the last
    /// good list and records the error for display.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: AppResult<Vec<JobPosting>>,
    ) -> bool {
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                newest = self.issued,
                "Discarding stale job list response"
            );
            return false;
        }

        match result {
            Ok(mut jobs) => {
                sort_newest_first(&mut jobs);
                debug!(count = jobs.len(), "Job list loaded");
                self.jobs = jobs;
                self.loaded = true;
                self.last_error = None;
                self.recompute();
            }
            Err(e) => {
                warn!(error = %e, "Job list fetch failed");
                self.last_error = Some(e.message);
            }
        }
        true
    }

    /// Add or remove an employment type filter. Returns whether it is
    /// selected afterwards.
    pub fn toggle_employment_type(&mut self, employment_type: &str) -> bool {
        let selected = self.criteria.employment_types.toggle(employment_type);
        self.recompute();
        selected
    }

    /// Replace the keyword and location groups.
    pub fn apply_terms(&mut self, keywords: TermSet, locations: TermSet) {
        self.criteria.keywords = keywords;
        self.criteria.locations = locations;
        self.recompute();
    }

    /// Replace the keyword and location groups from published criteria,
    /// keeping the selected employment types.
    pub fn apply_criteria(&mut self, criteria: &SearchCriteria) {
        self.apply_terms(criteria.keywords.clone(), criteria.locations.clone());
    }

    /// Active criteria.
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Selected employment types.
    pub fn employment_types(&self) -> &TermSet {
        &self.criteria.employment_types
    }

    /// Jobs matching the active criteria, newest first.
    pub fn visible(&self) -> &[JobPosting] {
        &self.visible
    }

    /// Every accepted job, newest first.
    pub fn all(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// Whether a fetch has succeeded yet.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Error of the last failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Result count line, e.g. `3 jobs found`.
    pub fn summary(&self) -> String {
        match self.visible.len() {
            1 => "1 job found".to_string(),
            n => format!("{n} jobs found"),
        }
    }

    fn recompute(&mut self) {
        self.visible = filter(&self.jobs, &self.criteria);
    }
}
