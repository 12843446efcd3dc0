//! # jobboard-entity
//!
//! Domain entity models for JobBoard: users and sessions, job postings,
//! and applications. Deserialization is tolerant of the loosely-typed
//! documents the backend returns (see [`wire`]).

pub mod application;
pub mod job;
pub mod user;
pub mod wire;

pub use application::{Application, ApplicationStatus};
pub use job::{JobPosting, JobStatus, Range};
pub use user::{Credentials, LoginGrant, Role, Session, UserProfile};
