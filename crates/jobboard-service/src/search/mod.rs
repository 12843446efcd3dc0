//! Job search: criteria, the filter engine, and the input collector.

pub mod collector;
pub mod criteria;
pub mod filter;

pub use collector::{SearchInputCollector, TermKind};
pub use criteria::SearchCriteria;
pub use filter::{filter, matches};
