use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::NotificationDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Notifications of the current user, newest first
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    responses(
        (status = 200, description = "Notifications", body = inline(SuccessResponse<Vec<NotificationDto>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/notifications")]
pub async fn list_notifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.notification.list.execute(&user.user_id).await {
        Ok(notifications) => ApiResponse::success(notifications),
        Err(e) => {
            error!("Failed to list notifications for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
