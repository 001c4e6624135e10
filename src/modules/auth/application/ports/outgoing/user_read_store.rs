use async_trait::async_trait;

use crate::auth::application::domain::{UserCredentials, UserRole};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserReadStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user is invalid: {0}")]
    CorruptRecord(String),
}

/// Query-only access to credentials. Blank keys resolve to `None`
/// without touching storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserReadStore: Send + Sync {
    async fn find_by_id(&self, user_id: &str)
        -> Result<Option<UserCredentials>, UserReadStoreError>;

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserReadStoreError>;

    async fn role_by_id(&self, user_id: &str) -> Result<Option<UserRole>, UserReadStoreError>;

    async fn role_by_email(&self, email: &str) -> Result<Option<UserRole>, UserReadStoreError>;
}
