use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::mappers::UserDto;
use crate::AppState;

/// Current user's account and profile
#[utoipa::path(
    get,
    path = "/user",
    tag = "user",
    responses(
        (status = 200, description = "Current user", body = inline(SuccessResponse<UserDto>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/user")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.get_current.execute(&user.user_id).await {
        Ok(Some(dto)) => ApiResponse::success(dto),
        Ok(None) => ApiResponse::not_found("USER_NOT_FOUND", "User not found."),
        Err(e) => {
            error!("Failed to load user {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
