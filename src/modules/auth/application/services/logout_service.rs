use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::SessionDirective;
use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUseCase};

/// Sessions are stateless JWTs, so signing out only clears the cookie.
#[derive(Debug, Clone, Default)]
pub struct LogoutService;

impl LogoutService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LogoutUseCase for LogoutService {
    async fn execute(&self, user_id: &str) -> Result<SessionDirective, LogoutError> {
        if user_id.trim().is_empty() {
            return Err(LogoutError::MissingSubject);
        }

        info!("User {} signed out", user_id);
        Ok(SessionDirective::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logout_clears_session() {
        let result = LogoutService::new().execute("user-1").await;
        assert_eq!(result, Ok(SessionDirective::Clear));
    }

    #[tokio::test]
    async fn logout_requires_subject() {
        let result = LogoutService::new().execute(" ").await;
        assert_eq!(result, Err(LogoutError::MissingSubject));
    }
}
