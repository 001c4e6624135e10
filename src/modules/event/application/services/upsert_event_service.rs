use async_trait::async_trait;
use tracing::{info, warn};

use crate::event::application::domain::Event;
use crate::event::application::mappers::EventDto;
use crate::event::application::ports::{
    incoming::use_cases::{UpsertEventCommand, UpsertEventError, UpsertEventUseCase},
    outgoing::{EventRepository, EventRepositoryError},
};
use crate::shared::domain::{parse_labeled, parse_skills, EventUrgency};

#[derive(Debug, Clone)]
pub struct UpsertEventService<R>
where
    R: EventRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpsertEventService<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_err(e: EventRepositoryError) -> UpsertEventError {
    match e {
        EventRepositoryError::NotFound(id) => UpsertEventError::EventNotFound(id),
        other => UpsertEventError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpsertEventUseCase for UpsertEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, command: UpsertEventCommand) -> Result<EventDto, UpsertEventError> {
        let urgency = parse_labeled::<EventUrgency>(&command.urgency)
            .map_err(|e| UpsertEventError::Validation(e.to_string()))?;
        let skills = parse_skills(&command.required_skills)
            .map_err(|e| UpsertEventError::Validation(e.to_string()))?;

        let Some(event_id) = command.target_id() else {
            let event = Event::new(
                &command.name,
                &command.description,
                &command.location,
                command.date_utc,
                urgency,
                skills,
            )
            .map_err(|e| UpsertEventError::Validation(e.to_string()))?;

            self.repository.create(&event).await.map_err(map_repo_err)?;

            info!(event_id = %event.id(), "Event created");
            return Ok(EventDto::from(&event));
        };

        let mut event = self
            .repository
            .find_by_id(event_id)
            .await
            .map_err(map_repo_err)?
            .ok_or_else(|| {
                warn!(event_id, "Upsert targeted a missing event");
                UpsertEventError::EventNotFound(event_id.to_string())
            })?;

        event
            .update_details(
                &command.name,
                &command.description,
                &command.location,
                urgency,
            )
            .map_err(|e| UpsertEventError::Validation(e.to_string()))?;
        event.reschedule(command.date_utc);
        event.set_required_skills(skills);

        self.repository.update(&event).await.map_err(map_repo_err)?;

        info!(event_id = %event.id(), "Event updated");
        Ok(EventDto::from(&event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::application::ports::outgoing::event_repository::MockEventRepository;
    use crate::shared::domain::VolunteerSkill;
    use chrono::{TimeZone, Utc};

    fn command(id: Option<&str>) -> UpsertEventCommand {
        UpsertEventCommand {
            id: id.map(str::to_string),
            name: "Food Drive".to_string(),
            description: "Sort donations".to_string(),
            location: "Warehouse 4".to_string(),
            date_utc: Utc.with_ymd_and_hms(2025, 12, 1, 16, 0, 0).unwrap(),
            urgency: "High".to_string(),
            required_skills: vec!["Cooking".to_string(), " DRIVING ".to_string()],
        }
    }

    fn stored(id: &str) -> Event {
        Event::rehydrate(
            id.to_string(),
            "Old name",
            "Old description",
            "Old location",
            Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
            EventUrgency::Low,
            vec![VolunteerSkill::Gardening],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_parses_urgency_and_skills_and_inserts_once() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_update().times(0);
        repo.expect_create()
            .times(1)
            .withf(|event: &Event| {
                event.urgency() == EventUrgency::High
                    && event.required_skills()
                        == [VolunteerSkill::Cooking, VolunteerSkill::Driving]
            })
            .returning(|_| Ok(()));

        let service = UpsertEventService::new(repo);
        let dto = service.execute(command(None)).await.unwrap();

        assert_eq!(dto.urgency, EventUrgency::High);
        assert_eq!(dto.required_skills, vec!["Cooking", "Driving"]);
        assert_eq!(dto.date_iso_string, "2025-12-01T16:00:00.000000Z");
        assert_eq!(dto.id.len(), 32);
    }

    #[tokio::test]
    async fn blank_id_creates() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(1).returning(|_| Ok(()));

        let service = UpsertEventService::new(repo);

        assert!(service.execute(command(Some("   "))).await.is_ok());
    }

    #[tokio::test]
    async fn update_applies_all_changes_and_saves_once() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id))));
        repo.expect_create().times(0);
        repo.expect_update()
            .times(1)
            .withf(|event: &Event| {
                event.id() == "evt-1"
                    && event.name() == "Food Drive"
                    && event.location() == "Warehouse 4"
                    && event.urgency() == EventUrgency::High
                    && event.required_skills()
                        == [VolunteerSkill::Cooking, VolunteerSkill::Driving]
            })
            .returning(|_| Ok(()));

        let service = UpsertEventService::new(repo);
        let dto = service.execute(command(Some("evt-1"))).await.unwrap();

        assert_eq!(dto.id, "evt-1");
        assert_eq!(dto.date_iso_string, "2025-12-01T16:00:00.000000Z");
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().times(0);

        let service = UpsertEventService::new(repo);
        let err = service.execute(command(Some("ghost"))).await.unwrap_err();

        assert_eq!(err, UpsertEventError::EventNotFound("ghost".to_string()));
        assert_eq!(err.to_string(), "Event with id 'ghost' not found.");
    }

    #[tokio::test]
    async fn bad_urgency_fails_before_any_io() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_create().times(0);

        let mut cmd = command(None);
        cmd.urgency = "Urgent".to_string();

        let service = UpsertEventService::new(repo);
        let err = service.execute(cmd).await.unwrap_err();

        assert_eq!(
            err,
            UpsertEventError::Validation(
                "Invalid urgency value 'Urgent'. Expected one of: Low, Medium, High, Critical."
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn bad_skill_names_offending_value() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(0);

        let mut cmd = command(None);
        cmd.required_skills = vec!["Cooking".into(), "Juggling".into()];

        let service = UpsertEventService::new(repo);

        match service.execute(cmd).await {
            Err(UpsertEventError::Validation(message)) => assert!(message.contains("'Juggling'")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_name_on_update_is_validation_error() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id))));
        repo.expect_update().times(0);

        let mut cmd = command(Some("evt-1"));
        cmd.name = "  ".to_string();

        let service = UpsertEventService::new(repo);

        assert_eq!(
            service.execute(cmd).await,
            Err(UpsertEventError::Validation("Name is required.".to_string()))
        );
    }

    #[tokio::test]
    async fn over_long_location_is_validation_error_without_insert() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().times(0);

        let mut cmd = command(None);
        cmd.location = "y".repeat(300);

        let service = UpsertEventService::new(repo);

        assert_eq!(
            service.execute(cmd).await,
            Err(UpsertEventError::Validation(
                "Location must be at most 255 characters.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let mut repo = MockEventRepository::new();
        repo.expect_create()
            .returning(|_| Err(EventRepositoryError::DatabaseError("down".into())));

        let service = UpsertEventService::new(repo);

        assert!(matches!(
            service.execute(command(None)).await,
            Err(UpsertEventError::RepositoryError(_))
        ));
    }
}
