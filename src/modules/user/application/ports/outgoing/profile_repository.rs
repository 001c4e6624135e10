use async_trait::async_trait;

use crate::user::application::domain::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile for user '{0}' not found.")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored profile is invalid: {0}")]
    CorruptRecord(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError>;

    async fn create(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError>;

    async fn update(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError>;
}
