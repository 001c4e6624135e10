use async_trait::async_trait;

use crate::event::application::mappers::EventDto;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetUpcomingEventsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUpcomingEventsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EventDto>, GetUpcomingEventsError>;
}
