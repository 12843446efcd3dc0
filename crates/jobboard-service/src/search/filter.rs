//! The job filter engine.
//!
//! Groups combine with AND, values within a group combine with OR, and an
//! empty group matches everything. Absent fields match as empty text.

use tracing::debug;

use jobboard_entity::JobPosting;

use super::criteria::SearchCriteria;

/// Return the jobs matching `criteria`, in input order.
pub fn filter(jobs: &[JobPosting], criteria: &SearchCriteria) -> Vec<JobPosting> {
    if criteria.is_empty() {
        return jobs.to_vec();
    }

    let matcher = Matcher::new(criteria);
    let result: Vec<JobPosting> = jobs.iter().filter(|job| matcher.matches(job)).cloned().collect();

    debug!(
        total = jobs.len(),
        matched = result.len(),
        "Filtered job list"
    );
    result
}

/// Whether a single job satisfies `criteria`.
pub fn matches(job: &JobPosting, criteria: &SearchCriteria) -> bool {
    Matcher::new(criteria).matches(job)
}

/// Criteria lowercased once per filter pass.
struct Matcher {
    keywords: Vec<String>,
    locations: Vec<String>,
    employment_types: Vec<String>,
}

impl Matcher {
    fn new(criteria: &SearchCriteria) -> Self {
        let lower = |terms: &jobboard_core::types::TermSet| -> Vec<String> {
            terms.iter().map(|t| t.to_lowercase()).collect()
        };
        Self {
            keywords: lower(&criteria.keywords),
            locations: lower(&criteria.locations),
            employment_types: lower(&criteria.employment_types),
        }
    }

    fn matches(&self, job: &JobPosting) -> bool {
        self.matches_keywords(job) && self.matches_locations(job) && self.matches_types(job)
    }

    fn matches_keywords(&self, job: &JobPosting) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let title = job.title.to_lowercase();
        let description = job
            .description
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        self.keywords
            .iter()
            .any(|k| title.contains(k.as_str()) || description.contains(k.as_str()))
    }

    fn matches_locations(&self, job: &JobPosting) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let job_locations: Vec<String> = job.locations.iter().map(|l| l.to_lowercase()).collect();
        self.locations
            .iter()
            .any(|wanted| job_locations.iter().any(|l| l.contains(wanted.as_str())))
    }

    fn matches_types(&self, job: &JobPosting) -> bool {
        if self.employment_types.is_empty() {
            return true;
        }
        self.employment_types.iter().any(|wanted| {
            job.employment_type
                .iter()
                .any(|t| t.to_lowercase() == *wanted)
        })
    }
}
