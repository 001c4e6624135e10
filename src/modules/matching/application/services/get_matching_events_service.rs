use async_trait::async_trait;
use chrono::Utc;

use crate::event::application::mappers::EventDto;
use crate::event::application::ports::outgoing::{EventRepository, UpcomingBound};
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingEventsError, GetMatchingEventsUseCase,
};

#[derive(Debug, Clone)]
pub struct GetMatchingEventsService<R>
where
    R: EventRepository + Send + Sync,
{
    events: R,
}

impl<R> GetMatchingEventsService<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> GetMatchingEventsUseCase for GetMatchingEventsService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EventDto>, GetMatchingEventsError> {
        let events = self
            .events
            .find_upcoming(Utc::now(), UpcomingBound::Inclusive)
            .await
            .map_err(|e| GetMatchingEventsError::RepositoryError(e.to_string()))?;

        Ok(events.iter().map(EventDto::from).collect())
    }
}
