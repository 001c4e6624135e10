use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::{AuthUser, UserRole};

/// Signed-in user returned by login and signup
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[schema(example = "3f0c4b8e2a9d4c51b6e7f8a9b0c1d2e3")]
    pub id: String,
    #[schema(example = "volunteer@example.com")]
    pub email: String,
    pub role: UserRole,
}

impl From<AuthUser> for AuthResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}
