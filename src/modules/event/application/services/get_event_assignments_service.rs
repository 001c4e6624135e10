use async_trait::async_trait;

use crate::event::application::ports::{
    incoming::use_cases::{GetEventAssignmentsError, GetEventAssignmentsUseCase},
    outgoing::VolunteerHistoryRepository,
};

#[derive(Debug, Clone)]
pub struct GetEventAssignmentsService<H>
where
    H: VolunteerHistoryRepository + Send + Sync,
{
    histories: H,
}

impl<H> GetEventAssignmentsService<H>
where
    H: VolunteerHistoryRepository + Send + Sync,
{
    pub fn new(histories: H) -> Self {
        Self { histories }
    }
}

#[async_trait]
impl<H> GetEventAssignmentsUseCase for GetEventAssignmentsService<H>
where
    H: VolunteerHistoryRepository + Send + Sync,
{
    async fn execute(&self, event_id: &str) -> Result<Vec<String>, GetEventAssignmentsError> {
        self.histories
            .volunteer_ids_for_event(event_id)
            .await
            .map_err(|e| GetEventAssignmentsError::RepositoryError(e.to_string()))
    }
}
