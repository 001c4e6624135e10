use async_trait::async_trait;

use crate::event::application::mappers::EventDto;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetMatchingEventsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetMatchingEventsUseCase: Send + Sync {
    /// Events from now on, including ones starting this instant.
    async fn execute(&self) -> Result<Vec<EventDto>, GetMatchingEventsError>;
}
