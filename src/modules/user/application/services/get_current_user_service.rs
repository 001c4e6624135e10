use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserReadStore;
use crate::user::application::mappers::{to_user_dto, UserDto};
use crate::user::application::ports::{
    incoming::use_cases::{GetCurrentUserError, GetCurrentUserUseCase},
    outgoing::ProfileRepository,
};

#[derive(Debug, Clone)]
pub struct GetCurrentUserService<Q, P>
where
    Q: UserReadStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    users: Q,
    profiles: P,
}

impl<Q, P> GetCurrentUserService<Q, P>
where
    Q: UserReadStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    pub fn new(users: Q, profiles: P) -> Self {
        Self { users, profiles }
    }
}

#[async_trait]
impl<Q, P> GetCurrentUserUseCase for GetCurrentUserService<Q, P>
where
    Q: UserReadStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<Option<UserDto>, GetCurrentUserError> {
        let Some(credentials) = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| GetCurrentUserError::RepositoryError(e.to_string()))?
        else {
            return Ok(None);
        };

        let profile = self
            .profiles
            .find_by_user_id(credentials.id())
            .await
            .map_err(|e| GetCurrentUserError::RepositoryError(e.to_string()))?;

        Ok(Some(to_user_dto(&credentials, profile.as_ref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{UserCredentials, UserRole};
    use crate::auth::application::ports::outgoing::user_read_store::MockUserReadStore;
    use crate::user::application::domain::{ProfileDetails, UserProfile};
    use crate::user::application::ports::outgoing::profile_repository::MockProfileRepository;
    use chrono::Utc;

    fn credentials(id: &str) -> UserCredentials {
        UserCredentials::rehydrate(
            id.to_string(),
            "me@example.com",
            "$argon2id$hash",
            UserRole::Admin,
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn unknown_user_is_none_without_profile_lookup() {
        let mut users = MockUserReadStore::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        let mut profiles = MockProfileRepository::new();
        profiles.expect_find_by_user_id().times(0);

        let service = GetCurrentUserService::new(users, profiles);

        assert_eq!(service.execute("ghost").await, Ok(None));
    }

    #[tokio::test]
    async fn user_without_profile_has_empty_fields() {
        let mut users = MockUserReadStore::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(credentials(id))));
        let mut profiles = MockProfileRepository::new();
        profiles.expect_find_by_user_id().returning(|_| Ok(None));

        let service = GetCurrentUserService::new(users, profiles);
        let dto = service.execute("admin-1").await.unwrap().unwrap();

        assert_eq!(dto.role, UserRole::Admin);
        assert_eq!(dto.city, "");
        assert_eq!(dto.preferences, "");
    }

    #[tokio::test]
    async fn profile_is_merged_in() {
        let mut users = MockUserReadStore::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(credentials(id))));
        let mut profiles = MockProfileRepository::new();
        profiles.expect_find_by_user_id().returning(|id| {
            Ok(Some(
                UserProfile::new(
                    id,
                    ProfileDetails {
                        first_name: "Ana".into(),
                        last_name: "Silva".into(),
                        address_one: "5 Bay Rd".into(),
                        city: "Tampa".into(),
                        state: "FL".into(),
                        zip_code: "33602".into(),
                        ..Default::default()
                    },
                )
                .unwrap(),
            ))
        });

        let service = GetCurrentUserService::new(users, profiles);
        let dto = service.execute("admin-1").await.unwrap().unwrap();

        assert_eq!(dto.first_name, "Ana");
        assert_eq!(dto.state, "FL");
    }
}
