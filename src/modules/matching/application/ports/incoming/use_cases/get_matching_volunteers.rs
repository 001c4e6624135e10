use async_trait::async_trait;

use crate::matching::application::mappers::VolunteerMatchDto;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetMatchingVolunteersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetMatchingVolunteersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<VolunteerMatchDto>, GetMatchingVolunteersError>;
}
