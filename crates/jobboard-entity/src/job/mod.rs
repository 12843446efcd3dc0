//! Job posting entities.

pub mod model;
pub mod status;

pub use model::{JobPosting, NewExperience, NewJobPosting, Range};
pub use status::JobStatus;
