//! Domain events emitted by JobBoard operations.
//!
//! Events are published by the session store and consumed by anything that
//! needs to react to identity changes (audit logging, UI refresh).

pub mod session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use session::SessionEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: SessionEvent,
}

impl DomainEvent {
    /// Create a new domain event stamped with the current time.
    pub fn new(payload: SessionEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            payload,
        }
    }
}
