use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::event::application::domain::Event;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Event with id '{0}' not found.")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored event is invalid: {0}")]
    CorruptRecord(String),
}

/// Whether an event scheduled exactly at `now` still counts as upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpcomingBound {
    Exclusive,
    Inclusive,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, event_id: &str) -> Result<Option<Event>, EventRepositoryError>;

    /// Unknown ids are skipped.
    async fn find_by_ids(&self, event_ids: &[String]) -> Result<Vec<Event>, EventRepositoryError>;

    /// Soonest first.
    async fn find_upcoming(
        &self,
        now: DateTime<Utc>,
        bound: UpcomingBound,
    ) -> Result<Vec<Event>, EventRepositoryError>;

    async fn create(&self, event: &Event) -> Result<(), EventRepositoryError>;

    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError>;
}
