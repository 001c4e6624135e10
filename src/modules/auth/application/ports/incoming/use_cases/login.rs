use async_trait::async_trait;

use crate::auth::application::domain::AuthOutcome;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Password hashing error: {0}")]
    HashingError(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthOutcome, LoginError>;
}
