use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::{
    AuthOutcome, AuthUser, SessionDirective, UserCredentials, UserRole,
};
use crate::auth::application::ports::{
    incoming::use_cases::{SignupCommand, SignupError, SignupUseCase},
    outgoing::{
        CredentialsRepository, CredentialsRepositoryError, PasswordHasher, TokenProvider,
        UserReadStore,
    },
};
use crate::notification::application::domain::Notification;

pub const WELCOME_MESSAGE: &str = "Welcome to Volunteer Hub! 🎉 Thanks for signing up.";

pub struct SignupService<Q, R>
where
    Q: UserReadStore + Send + Sync,
    R: CredentialsRepository + Send + Sync,
{
    read_store: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> SignupService<Q, R>
where
    Q: UserReadStore + Send + Sync,
    R: CredentialsRepository + Send + Sync,
{
    pub fn new(
        read_store: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            read_store,
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> SignupUseCase for SignupService<Q, R>
where
    Q: UserReadStore + Send + Sync,
    R: CredentialsRepository + Send + Sync,
{
    async fn execute(&self, command: SignupCommand) -> Result<AuthOutcome, SignupError> {
        let existing = self
            .read_store
            .find_by_email(command.email())
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(SignupError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| SignupError::HashingError(e.to_string()))?;

        let credentials = UserCredentials::new(command.email(), &password_hash, UserRole::Volunteer)
            .map_err(|e| SignupError::InvalidEmail(e.to_string()))?;
        let welcome = Notification::new(credentials.id(), WELCOME_MESSAGE)
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;

        // The unique email index still guards against a concurrent signup.
        self.repository
            .create_account(&credentials, &welcome)
            .await
            .map_err(|e| match e {
                CredentialsRepositoryError::EmailAlreadyExists => SignupError::EmailAlreadyExists,
                other => SignupError::RepositoryError(other.to_string()),
            })?;

        let user = AuthUser::from(&credentials);
        let issued = self
            .tokens
            .issue_token(&user)
            .map_err(|e| SignupError::TokenError(e.to_string()))?;

        info!("New volunteer account {} created", user.id);

        Ok(AuthOutcome {
            user,
            session: SessionDirective::Issue {
                token: issued.token,
                max_age_minutes: issued.expires_in_minutes,
            },
        })
    }
}
