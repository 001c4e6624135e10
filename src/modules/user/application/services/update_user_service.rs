use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::UserReadStore;
use crate::shared::domain::{parse_skills, PatchField, VolunteerSkill};
use crate::user::application::domain::{ProfileDetails, UserProfile};
use crate::user::application::mappers::{to_user_dto, UserDto};
use crate::user::application::ports::{
    incoming::use_cases::{UpdateUserError, UpdateUserPatch, UpdateUserUseCase},
    outgoing::ProfileRepository,
};

#[derive(Debug, Clone)]
pub struct UpdateUserService<Q, P>
where
    Q: UserReadStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    users: Q,
    profiles: P,
}

impl<Q, P> UpdateUserService<Q, P>
where
    Q: UserReadStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    pub fn new(users: Q, profiles: P) -> Self {
        Self { users, profiles }
    }
}

fn repo_err(e: impl std::fmt::Display) -> UpdateUserError {
    UpdateUserError::RepositoryError(e.to_string())
}

fn merge_required(
    field: &'static str,
    patch: PatchField<String>,
    target: &mut String,
) -> Result<(), UpdateUserError> {
    match patch {
        PatchField::Unset => Ok(()),
        PatchField::Null => Err(UpdateUserError::CannotClearField(field)),
        PatchField::Value(value) => {
            *target = value;
            Ok(())
        }
    }
}

fn merge_optional<T: Default>(patch: PatchField<T>, target: &mut T) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *target = T::default(),
        PatchField::Value(value) => *target = value,
    }
}

/// Builds a first profile. Every required field must carry a value.
fn initial_details(
    patch: UpdateUserPatch,
    skills: PatchField<Vec<VolunteerSkill>>,
) -> Result<ProfileDetails, UpdateUserError> {
    let (
        PatchField::Value(first_name),
        PatchField::Value(last_name),
        PatchField::Value(address_one),
        PatchField::Value(city),
        PatchField::Value(state),
        PatchField::Value(zip_code),
    ) = (
        patch.first_name,
        patch.last_name,
        patch.address_one,
        patch.city,
        patch.state,
        patch.zip_code,
    )
    else {
        return Err(UpdateUserError::MissingRequiredFields);
    };

    Ok(ProfileDetails {
        first_name,
        last_name,
        address_one,
        address_two: patch.address_two.into_value(),
        city,
        state,
        zip_code,
        skills: skills.into_value().unwrap_or_default(),
        preferences: patch.preferences.into_value().unwrap_or_default(),
        availability: patch.availability.into_value().unwrap_or_default(),
    })
}

fn merged_details(
    current: &ProfileDetails,
    patch: UpdateUserPatch,
    skills: PatchField<Vec<VolunteerSkill>>,
) -> Result<ProfileDetails, UpdateUserError> {
    let mut details = current.clone();

    merge_required("First name", patch.first_name, &mut details.first_name)?;
    merge_required("Last name", patch.last_name, &mut details.last_name)?;
    merge_required("AddressOne", patch.address_one, &mut details.address_one)?;
    merge_required("City", patch.city, &mut details.city)?;
    merge_required("State", patch.state, &mut details.state)?;
    merge_required("ZipCode", patch.zip_code, &mut details.zip_code)?;

    match patch.address_two {
        PatchField::Unset => {}
        PatchField::Null => details.address_two = None,
        PatchField::Value(value) => details.address_two = Some(value),
    }
    merge_optional(patch.preferences, &mut details.preferences);
    merge_optional(skills, &mut details.skills);
    merge_optional(patch.availability, &mut details.availability);

    Ok(details)
}

#[async_trait]
impl<Q, P> UpdateUserUseCase for UpdateUserService<Q, P>
where
    Q: UserReadStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
        mut patch: UpdateUserPatch,
    ) -> Result<UserDto, UpdateUserError> {
        let credentials = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(repo_err)?
            .ok_or(UpdateUserError::UserNotFound)?;

        let skills = match std::mem::take(&mut patch.skills) {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(raw) => PatchField::Value(
                parse_skills(&raw).map_err(|e| UpdateUserError::Validation(e.to_string()))?,
            ),
        };

        let existing = self
            .profiles
            .find_by_user_id(credentials.id())
            .await
            .map_err(repo_err)?;

        let profile = match existing {
            None => {
                let details = initial_details(patch, skills)?;
                let profile = UserProfile::new(credentials.id(), details)
                    .map_err(|e| UpdateUserError::Validation(e.to_string()))?;

                self.profiles.create(&profile).await.map_err(repo_err)?;
                info!(user_id = %credentials.id(), "Profile created");
                profile
            }
            Some(mut profile) => {
                let details = merged_details(profile.details(), patch, skills)?;
                profile
                    .update_profile(details)
                    .map_err(|e| UpdateUserError::Validation(e.to_string()))?;

                self.profiles.update(&profile).await.map_err(repo_err)?;
                info!(user_id = %credentials.id(), "Profile updated");
                profile
            }
        };

        Ok(to_user_dto(&credentials, Some(&profile)))
    }
}
