use async_trait::async_trait;

use crate::user::application::domain::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VolunteerDirectoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerDirectory: Send + Sync {
    /// Profiles whose owner has the Volunteer role. Admins are never listed.
    async fn volunteer_profiles(&self) -> Result<Vec<UserProfile>, VolunteerDirectoryError>;
}
