use async_trait::async_trait;

use crate::shared::domain::PatchField;
use crate::user::application::mappers::UserDto;

/// Partial profile update.
///
/// `Unset` keeps the stored value, `Value` replaces it and `Null` clears it.
/// Only optional fields (`address_two`, `preferences`, `skills`,
/// `availability`) can be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserPatch {
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub address_one: PatchField<String>,
    pub address_two: PatchField<String>,
    pub city: PatchField<String>,
    pub state: PatchField<String>,
    pub zip_code: PatchField<String>,
    pub skills: PatchField<Vec<String>>,
    pub preferences: PatchField<String>,
    pub availability: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found.")]
    UserNotFound,

    #[error("Cannot create profile: missing required fields.")]
    MissingRequiredFields,

    #[error("{0} cannot be cleared.")]
    CannotClearField(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, patch: UpdateUserPatch)
        -> Result<UserDto, UpdateUserError>;
}
