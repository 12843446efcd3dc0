//! Job application entities.

pub mod model;
pub mod status;

pub use model::Application;
pub use status::ApplicationStatus;
