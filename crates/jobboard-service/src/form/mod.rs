//! Client-side form validation.
//!
//! Each form checks its constraints before any network call and produces
//! the request payload only when every check passes.

pub mod application;
pub mod job_post;
pub mod register;
pub mod url;

pub use application::ApplicationForm;
pub use job_post::{JobPostForm, POST_EMPLOYMENT_TYPES, WORK_MODES};
pub use register::RegisterForm;
pub use url::normalize_url;
