use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is unreadable")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Password hashing. Implementations must keep CPU work off the async executor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash cannot be read.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
