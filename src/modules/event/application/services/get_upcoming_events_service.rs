use async_trait::async_trait;
use chrono::Utc;

use crate::event::application::mappers::EventDto;
use crate::event::application::ports::{
    incoming::use_cases::{GetUpcomingEventsError, GetUpcomingEventsUseCase},
    outgoing::{EventRepository, UpcomingBound},
};

#[derive(Debug, Clone)]
pub struct GetUpcomingEventsService<R>
where
    R: EventRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetUpcomingEventsService<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUpcomingEventsUseCase for GetUpcomingEventsService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EventDto>, GetUpcomingEventsError> {
        let events = self
            .repository
            .find_upcoming(Utc::now(), UpcomingBound::Exclusive)
            .await
            .map_err(|e| GetUpcomingEventsError::RepositoryError(e.to_string()))?;

        Ok(events.iter().map(EventDto::from).collect())
    }
}
