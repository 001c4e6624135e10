use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::event::application::domain::VolunteerHistory;
use crate::shared::domain::datetime::to_iso_string;

pub const DEFAULT_ASSIGNMENT_MINUTES: i32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignVolunteerCommand {
    pub event_id: String,
    pub volunteer_id: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignVolunteerResult {
    pub volunteer_history_id: String,
    pub event_id: String,
    pub volunteer_id: String,
    #[schema(example = "2025-11-20T15:00:00.000000Z")]
    pub date_utc: String,
    #[schema(example = 60)]
    pub duration_minutes: i32,
}

impl From<&VolunteerHistory> for AssignVolunteerResult {
    fn from(history: &VolunteerHistory) -> Self {
        Self {
            volunteer_history_id: history.id().to_string(),
            event_id: history.event_id().to_string(),
            volunteer_id: history.user_id().to_string(),
            date_utc: to_iso_string(&history.date_utc()),
            duration_minutes: history.duration_minutes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignVolunteerError {
    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AssignVolunteerUseCase: Send + Sync {
    /// `None` when the event or the volunteer does not exist.
    async fn execute(
        &self,
        command: AssignVolunteerCommand,
    ) -> Result<Option<AssignVolunteerResult>, AssignVolunteerError>;
}
