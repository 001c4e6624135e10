use async_trait::async_trait;

use crate::event::application::domain::Event;
use crate::report::application::domain::{ActivityRecord, ReportRange};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

/// Read-only joins over history, events, credentials and profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportingQuery: Send + Sync {
    /// History rows whose participation date falls in `range`, with their
    /// event, volunteer email and profile.
    async fn activity_in_range(
        &self,
        range: ReportRange,
    ) -> Result<Vec<ActivityRecord>, ReportingQueryError>;

    /// Events whose own date falls in `range`, by date then name.
    async fn events_in_range(&self, range: ReportRange) -> Result<Vec<Event>, ReportingQueryError>;
}
