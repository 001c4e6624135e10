use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::{AuthOutcome, AuthUser, SessionDirective};
use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserReadStore},
};

pub struct LoginService<Q>
where
    Q: UserReadStore + Send + Sync,
{
    read_store: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginService<Q>
where
    Q: UserReadStore + Send + Sync,
{
    pub fn new(
        read_store: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            read_store,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUseCase for LoginService<Q>
where
    Q: UserReadStore + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthOutcome, LoginError> {
        let email = command.email.trim().to_lowercase();
        if email.is_empty() || command.password.is_empty() {
            return Err(LoginError::InvalidCredentials);
        }

        let credentials = self
            .read_store
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&command.password, credentials.password_hash())
            .await
            .map_err(|e| LoginError::HashingError(e.to_string()))?;

        if !matches {
            warn!("Failed login attempt for {}", email);
            return Err(LoginError::InvalidCredentials);
        }

        let user = AuthUser::from(&credentials);
        let issued = self
            .tokens
            .issue_token(&user)
            .map_err(|e| LoginError::TokenError(e.to_string()))?;

        info!("User {} signed in", user.id);

        Ok(AuthOutcome {
            user,
            session: SessionDirective::Issue {
                token: issued.token,
                max_age_minutes: issued.expires_in_minutes,
            },
        })
    }
}
