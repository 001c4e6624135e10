use async_trait::async_trait;

use crate::auth::application::domain::AuthOutcome;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub struct SignupCommand {
    email: String,
    password: String,
}

impl SignupCommand {
    /// Validates email syntax and password length; the email is normalised to lowercase.
    pub fn new(email: &str, password: &str) -> Result<Self, SignupError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(SignupError::InvalidEmail("Email is required.".to_string()));
        }
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(SignupError::InvalidEmail(format!(
                "'{email}' is not a valid email address."
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignupError::WeakPassword(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters."
            )));
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    WeakPassword(String),

    #[error("A user with this email already exists.")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Password hashing error: {0}")]
    HashingError(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

#[async_trait]
pub trait SignupUseCase: Send + Sync {
    async fn execute(&self, command: SignupCommand) -> Result<AuthOutcome, SignupError>;
}
