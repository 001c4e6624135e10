use async_trait::async_trait;

use crate::auth::application::domain::SessionDirective;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("No authenticated user")]
    MissingSubject,
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<SessionDirective, LogoutError>;
}
