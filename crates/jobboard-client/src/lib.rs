//! # jobboard-client
//!
//! Typed HTTP client for the JobBoard backend. Every call is a single
//! request/response: no retries, no backoff, no cancellation. Failures are
//! mapped into [`jobboard_core::AppError`] with a message fit for display.
//!
//! Authenticated calls carry `Authorization: Bearer <token>` using the token
//! installed with [`ApiClient::set_token`].

pub mod applications;
pub mod auth;
pub mod client;
pub mod dto;
pub mod jobs;

pub use applications::{ApplicationSubmission, ResumeUpload};
pub use client::ApiClient;
pub use dto::RegisterRequest;
