use crate::config::{parsed_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_minutes: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let issuer = parsed_or("JWT_ISSUER", "volunteer-hub".to_string())?;
        let audience = parsed_or("JWT_AUDIENCE", "volunteer-hub".to_string())?;
        let expiry_minutes = parsed_or("JWT_EXPIRY_MINUTES", 60i64)?;

        if expiry_minutes <= 0 || expiry_minutes > 24 * 60 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY_MINUTES",
                reason: "must be between 1 and 1440 minutes".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer,
            audience,
            expiry_minutes,
        })
    }
}
