use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::UserRole;
use crate::auth::application::ports::{
    incoming::use_cases::{
        AuthorizationDecision, AuthorizationError, AuthorizeUseCase, Requirement,
    },
    outgoing::UserReadStore,
};

#[derive(Debug, Clone)]
pub struct AuthorizationService<Q>
where
    Q: UserReadStore + Send + Sync,
{
    read_store: Q,
}

impl<Q> AuthorizationService<Q>
where
    Q: UserReadStore + Send + Sync,
{
    pub fn new(read_store: Q) -> Self {
        Self { read_store }
    }
}

/// Role that satisfies each requirement. `User` is Admin-only as well.
fn accepted_role(requirement: Requirement) -> UserRole {
    match requirement {
        Requirement::Admin => UserRole::Admin,
        Requirement::User => UserRole::Admin,
    }
}

#[async_trait]
impl<Q> AuthorizeUseCase for AuthorizationService<Q>
where
    Q: UserReadStore + Send + Sync,
{
    async fn execute(
        &self,
        requirement: Requirement,
        subject: Option<&str>,
    ) -> Result<AuthorizationDecision, AuthorizationError> {
        let subject = match subject.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s,
            None => return Ok(AuthorizationDecision::Denied),
        };

        let role = self
            .read_store
            .role_by_id(subject)
            .await
            .map_err(|e| AuthorizationError::LookupFailed(e.to_string()))?;

        let decision = if role == Some(accepted_role(requirement)) {
            AuthorizationDecision::Granted
        } else {
            AuthorizationDecision::Denied
        };

        debug!("{:?} requirement for {}: {:?}", requirement, subject, decision);
        Ok(decision)
    }
}
