//! Job listings: ordering, the listing controller and the job service.

pub mod listing;
pub mod service;
pub mod sort;

pub use listing::{FetchTicket, JobListing};
pub use service::JobService;
pub use sort::sort_newest_first;
