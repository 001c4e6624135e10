use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    HttpResponse,
};
use tracing::error;

use super::extractors::SESSION_COOKIE;
use crate::auth::application::domain::SessionDirective;
use crate::shared::api::ApiResponse;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookieConfig {
    pub secure: bool,
}

fn session_cookie(
    value: String,
    max_age_minutes: i64,
    config: &SessionCookieConfig,
) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::minutes(max_age_minutes))
        .finish()
}

/// Applies the directive returned by an auth use case to the outgoing response.
pub fn apply_session(
    mut response: HttpResponse,
    directive: &SessionDirective,
    config: &SessionCookieConfig,
) -> HttpResponse {
    let result = match directive {
        SessionDirective::Issue {
            token,
            max_age_minutes,
        } => response.add_cookie(&session_cookie(token.clone(), *max_age_minutes, config)),
        SessionDirective::Clear => {
            response.add_removal_cookie(&session_cookie(String::new(), 0, config))
        }
    };

    match result {
        Ok(()) => response,
        Err(e) => {
            error!("Failed to set session cookie: {}", e);
            ApiResponse::internal_error()
        }
    }
}
