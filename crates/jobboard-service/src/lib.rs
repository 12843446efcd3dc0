//! # jobboard-service
//!
//! Client-side business logic for JobBoard: the job filter engine, the
//! search input collector, the job listing controller, form validation,
//! and the services that tie them to the HTTP client and session store.
//!
//! Services follow constructor injection: dependencies are provided at
//! construction time via `Arc` references.

pub mod application;
pub mod form;
pub mod job;
pub mod search;

pub use application::ApplicationService;
pub use form::{ApplicationForm, JobPostForm, RegisterForm};
pub use job::{sort_newest_first, FetchTicket, JobListing, JobService};
pub use search::{filter, SearchCriteria, SearchInputCollector, TermKind};
