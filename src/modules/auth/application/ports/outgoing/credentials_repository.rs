use async_trait::async_trait;

use crate::auth::application::domain::UserCredentials;
use crate::notification::application::domain::Notification;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsRepositoryError {
    #[error("A user with this email already exists.")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CredentialsRepository: Send + Sync {
    /// Inserts the credentials and their welcome notification in one transaction.
    async fn create_account(
        &self,
        credentials: &UserCredentials,
        welcome: &Notification,
    ) -> Result<(), CredentialsRepositoryError>;
}
