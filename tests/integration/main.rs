//! End-to-end tests: the client stack against an in-process mock backend.

mod access_test;
mod applications_test;
mod cli_test;
mod helpers;
mod jobs_test;
mod session_test;
