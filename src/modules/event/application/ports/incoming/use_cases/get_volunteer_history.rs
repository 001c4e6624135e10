use async_trait::async_trait;

use crate::event::application::mappers::VolunteerHistoryDto;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetVolunteerHistoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetVolunteerHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: &str,
    ) -> Result<Vec<VolunteerHistoryDto>, GetVolunteerHistoryError>;
}
