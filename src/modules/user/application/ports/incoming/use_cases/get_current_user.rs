use async_trait::async_trait;

use crate::user::application::mappers::UserDto;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    /// `None` when no credentials exist for `user_id`.
    async fn execute(&self, user_id: &str) -> Result<Option<UserDto>, GetCurrentUserError>;
}
