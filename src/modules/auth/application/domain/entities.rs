use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::{
    errors::require_text, new_id, parse_labeled, DomainError, InvalidEnumValue, LabeledEnum,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    #[default]
    Volunteer,
    Admin,
}

impl LabeledEnum for UserRole {
    const KIND: &'static str = "role";
    const ALL: &'static [Self] = &[UserRole::Volunteer, UserRole::Admin];

    fn label(&self) -> &'static str {
        match self {
            UserRole::Volunteer => "Volunteer",
            UserRole::Admin => "Admin",
        }
    }
}

impl UserRole {
    pub fn parse(raw: &str) -> Result<Self, InvalidEnumValue> {
        parse_labeled(raw)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Login identity. Email is stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    id: String,
    email: String,
    password_hash: String,
    role: UserRole,
    created_at: DateTime<Utc>,
}

impl UserCredentials {
    pub fn new(email: &str, password_hash: &str, role: UserRole) -> Result<Self, DomainError> {
        Self::rehydrate(new_id(), email, password_hash, role, Utc::now())
    }

    pub fn rehydrate(
        id: String,
        email: &str,
        password_hash: &str,
        role: UserRole,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let id = require_text("User id", &id)?;
        let email = require_text("Email", email)?.to_lowercase();
        let password_hash = require_text("Password hash", password_hash)?;

        Ok(Self {
            id,
            email,
            password_hash,
            role,
            created_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_volunteer(&self) -> bool {
        self.role == UserRole::Volunteer
    }
}

/// Public view of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

impl From<&UserCredentials> for AuthUser {
    fn from(credentials: &UserCredentials) -> Self {
        Self {
            id: credentials.id().to_string(),
            email: credentials.email().to_string(),
            role: credentials.role(),
        }
    }
}

/// What the HTTP layer must do with the session cookie after an auth use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDirective {
    Issue { token: String, max_age_minutes: i64 },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub user: AuthUser,
    pub session: SessionDirective,
}
