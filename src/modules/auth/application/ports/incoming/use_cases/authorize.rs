use async_trait::async_trait;

/// Named access requirements attached to routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Admin,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Granted,
    Denied,
}

impl AuthorizationDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthorizationDecision::Granted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Role lookup failed: {0}")]
    LookupFailed(String),
}

#[async_trait]
pub trait AuthorizeUseCase: Send + Sync {
    async fn execute(
        &self,
        requirement: Requirement,
        subject: Option<&str>,
    ) -> Result<AuthorizationDecision, AuthorizationError>;
}
