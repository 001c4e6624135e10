use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::UserReadStore;
use crate::event::application::domain::VolunteerHistory;
use crate::event::application::ports::{
    incoming::use_cases::{
        AssignVolunteerCommand, AssignVolunteerError, AssignVolunteerResult,
        AssignVolunteerUseCase,
    },
    outgoing::{AssignmentRecord, EventRepository, VolunteerHistoryRepository},
};
use crate::notification::application::domain::Notification;

/// e.g. `You’ve been assigned to the event “Food Drive” on November 20, 2025.`
pub fn assignment_message(event_name: &str, date_utc: DateTime<Utc>) -> String {
    format!(
        "You’ve been assigned to the event “{}” on {}.",
        event_name,
        date_utc.format("%B %-d, %Y")
    )
}

pub struct AssignVolunteerService<E, H, Q>
where
    E: EventRepository + Send + Sync,
    H: VolunteerHistoryRepository + Send + Sync,
    Q: UserReadStore + Send + Sync,
{
    events: E,
    histories: H,
    users: Q,
}

impl<E, H, Q> AssignVolunteerService<E, H, Q>
where
    E: EventRepository + Send + Sync,
    H: VolunteerHistoryRepository + Send + Sync,
    Q: UserReadStore + Send + Sync,
{
    pub fn new(events: E, histories: H, users: Q) -> Self {
        Self {
            events,
            histories,
            users,
        }
    }
}

fn repo_err(e: impl std::fmt::Display) -> AssignVolunteerError {
    AssignVolunteerError::RepositoryError(e.to_string())
}

#[async_trait]
impl<E, H, Q> AssignVolunteerUseCase for AssignVolunteerService<E, H, Q>
where
    E: EventRepository + Send + Sync,
    H: VolunteerHistoryRepository + Send + Sync,
    Q: UserReadStore + Send + Sync,
{
    async fn execute(
        &self,
        command: AssignVolunteerCommand,
    ) -> Result<Option<AssignVolunteerResult>, AssignVolunteerError> {
        let Some(event) = self
            .events
            .find_by_id(&command.event_id)
            .await
            .map_err(repo_err)?
        else {
            warn!(event_id = %command.event_id, "Assignment to unknown event");
            return Ok(None);
        };

        let volunteer = self
            .users
            .find_by_id(&command.volunteer_id)
            .await
            .map_err(repo_err)?;
        if !volunteer.as_ref().is_some_and(|user| user.is_volunteer()) {
            warn!(volunteer_id = %command.volunteer_id, "Assignment target is not a volunteer");
            return Ok(None);
        }

        if let Some(existing) = self
            .histories
            .find_by_event_and_user(event.id(), &command.volunteer_id)
            .await
            .map_err(repo_err)?
        {
            return Ok(Some(AssignVolunteerResult::from(&existing)));
        }

        let history = VolunteerHistory::new(
            &command.volunteer_id,
            event.id(),
            event.date_utc(),
            command.duration_minutes,
        )
        .map_err(|e| AssignVolunteerError::Validation(e.to_string()))?;

        let notification = Notification::new(
            &command.volunteer_id,
            &assignment_message(event.name(), event.date_utc()),
        )
        .map_err(|e| AssignVolunteerError::Validation(e.to_string()))?;

        let record = self
            .histories
            .record_assignment(&history, &notification)
            .await
            .map_err(repo_err)?;

        if let AssignmentRecord::Created(created) = &record {
            info!(
                history_id = %created.id(),
                event_id = %created.event_id(),
                volunteer_id = %created.user_id(),
                "Volunteer assigned"
            );
        }

        Ok(Some(AssignVolunteerResult::from(record.history())))
    }
}
