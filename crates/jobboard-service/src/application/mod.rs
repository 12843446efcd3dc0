//! Job applications: submission and employer review.

pub mod service;

pub use service::ApplicationService;
