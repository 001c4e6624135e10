use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::event::application::mappers::EventDto;

/// Create-or-update input. A missing or blank `id` creates a new event.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertEventCommand {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_utc: DateTime<Utc>,
    pub urgency: String,
    pub required_skills: Vec<String>,
}

impl UpsertEventCommand {
    /// Trimmed id, `None` when absent or blank.
    pub fn target_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertEventError {
    #[error("{0}")]
    Validation(String),

    #[error("Event with id '{0}' not found.")]
    EventNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertEventUseCase: Send + Sync {
    async fn execute(&self, command: UpsertEventCommand) -> Result<EventDto, UpsertEventError>;
}
