use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

pub const SESSION_COOKIE: &str = "auth_token";

/// Subject of a valid session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

pub(crate) fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Bearer header wins over the session cookie.
fn extract_token(req: &HttpRequest) -> Option<String> {
    extract_token_from_header(req).or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|c| c.value().trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn token_provider(req: &HttpRequest) -> Option<&web::Data<Arc<dyn TokenProvider + Send + Sync>>> {
    req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
}

/// Subject id when the request carries a valid token, `None` otherwise.
pub(crate) fn resolve_subject(req: &HttpRequest) -> Result<Option<String>, ActixError> {
    let Some(provider) = token_provider(req) else {
        tracing::error!("TokenProvider is not registered as app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    Ok(extract_token(req)
        .and_then(|token| provider.verify_token(&token).ok())
        .map(|claims| claims.sub)
        .filter(|sub| !sub.trim().is_empty()))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service = match token_provider(req) {
            Some(service) => service,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_TOKEN",
                    "Missing authorization header or session cookie",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) if !claims.sub.trim().is_empty() => {
                ready(Ok(AuthenticatedUser { user_id: claims.sub }))
            }
            _ => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}
