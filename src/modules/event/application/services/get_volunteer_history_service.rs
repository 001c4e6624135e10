use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::event::application::domain::Event;
use crate::event::application::mappers::{to_history_dto, VolunteerHistoryDto};
use crate::event::application::ports::{
    incoming::use_cases::{GetVolunteerHistoryError, GetVolunteerHistoryUseCase},
    outgoing::{EventRepository, VolunteerHistoryRepository},
};

#[derive(Debug, Clone)]
pub struct GetVolunteerHistoryService<E, H>
where
    E: EventRepository + Send + Sync,
    H: VolunteerHistoryRepository + Send + Sync,
{
    events: E,
    histories: H,
}

impl<E, H> GetVolunteerHistoryService<E, H>
where
    E: EventRepository + Send + Sync,
    H: VolunteerHistoryRepository + Send + Sync,
{
    pub fn new(events: E, histories: H) -> Self {
        Self { events, histories }
    }
}

#[async_trait]
impl<E, H> GetVolunteerHistoryUseCase for GetVolunteerHistoryService<E, H>
where
    E: EventRepository + Send + Sync,
    H: VolunteerHistoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
    ) -> Result<Vec<VolunteerHistoryDto>, GetVolunteerHistoryError> {
        let histories = self
            .histories
            .list_for_user(user_id)
            .await
            .map_err(|e| GetVolunteerHistoryError::RepositoryError(e.to_string()))?;

        if histories.is_empty() {
            return Ok(Vec::new());
        }

        let mut event_ids: Vec<String> = histories
            .iter()
            .map(|h| h.event_id().to_string())
            .collect();
        event_ids.sort();
        event_ids.dedup();

        let events: HashMap<String, Event> = self
            .events
            .find_by_ids(&event_ids)
            .await
            .map_err(|e| GetVolunteerHistoryError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|event| (event.id().to_string(), event))
            .collect();

        Ok(histories
            .iter()
            .filter_map(|history| match events.get(history.event_id()) {
                Some(event) => Some(to_history_dto(history, event)),
                None => {
                    warn!(history_id = %history.id(), "History references a missing event");
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::application::domain::VolunteerHistory;
    use crate::event::application::ports::outgoing::{
        event_repository::MockEventRepository,
        volunteer_history_repository::MockVolunteerHistoryRepository,
    };
    use crate::shared::domain::EventUrgency;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, name: &str) -> Event {
        Event::rehydrate(
            id.to_string(),
            name,
            "desc",
            "loc",
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
            EventUrgency::Medium,
            vec![],
        )
        .unwrap()
    }

    fn history(id: &str, event_id: &str, day: u32, minutes: i32) -> VolunteerHistory {
        VolunteerHistory::rehydrate(
            id.to_string(),
            "vol-1",
            event_id,
            Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap(),
            minutes,
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn joins_histories_with_events_in_history_order() {
        let mut histories = MockVolunteerHistoryRepository::new();
        histories.expect_list_for_user().returning(|_| {
            Ok(vec![
                history("h3", "evt-b", 20, 60),
                history("h2", "evt-gone", 15, 30),
                history("h1", "evt-a", 10, 125),
            ])
        });

        let mut events = MockEventRepository::new();
        events
            .expect_find_by_ids()
            .times(1)
            .withf(|ids: &[String]| ids == ["evt-a", "evt-b", "evt-gone"])
            .returning(|_| Ok(vec![event("evt-a", "Alpha"), event("evt-b", "Beta")]));

        let service = GetVolunteerHistoryService::new(events, histories);
        let rows = service.execute("vol-1").await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Beta");
        assert_eq!(rows[0].time_at_event, "1 hour");
        assert_eq!(rows[1].name, "Alpha");
        assert_eq!(rows[1].time_at_event, "2 hours 5 minutes");
    }

    #[tokio::test]
    async fn no_history_skips_event_lookup() {
        let mut histories = MockVolunteerHistoryRepository::new();
        histories.expect_list_for_user().returning(|_| Ok(vec![]));

        let mut events = MockEventRepository::new();
        events.expect_find_by_ids().times(0);

        let service = GetVolunteerHistoryService::new(events, histories);

        assert_eq!(service.execute("vol-1").await, Ok(vec![]));
    }
}
