//! Core type definitions used across the JobBoard workspace.

pub mod term_set;

pub use term_set::TermSet;
