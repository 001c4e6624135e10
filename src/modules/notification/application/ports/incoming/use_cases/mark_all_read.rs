use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkAllReadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkAllReadUseCase: Send + Sync {
    /// Returns how many notifications flipped from unread to read.
    async fn execute(&self, user_id: &str) -> Result<u64, MarkAllReadError>;
}
