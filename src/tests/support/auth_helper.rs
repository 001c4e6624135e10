use std::sync::Arc;

use actix_web::{dev::ServiceResponse, test, web};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::{AuthUser, UserRole};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "volunteer-hub".to_string(),
        audience: "volunteer-hub".to_string(),
        expiry_minutes: 60,
    })
}

/// Token provider as the extractors look it up in app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header carrying a valid token for `user_id`.
pub fn bearer_for(user_id: &str) -> (&'static str, String) {
    let user = AuthUser {
        id: user_id.to_string(),
        email: format!("{user_id}@example.com"),
        role: UserRole::Volunteer,
    };
    let issued = test_jwt_service()
        .issue_token(&user)
        .expect("test token should be issued");

    ("Authorization", format!("Bearer {}", issued.token))
}

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    test::read_body_json(resp).await
}
