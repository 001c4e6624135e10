use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAllReadResponse {
    #[schema(example = 3)]
    pub updated: u64,
}

/// Mark every unread notification of the current user as read
#[utoipa::path(
    post,
    path = "/notifications/mark-all-read",
    tag = "notifications",
    responses(
        (status = 200, description = "Number of notifications updated", body = inline(SuccessResponse<MarkAllReadResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/notifications/mark-all-read")]
pub async fn mark_all_read_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.notification.mark_all_read.execute(&user.user_id).await {
        Ok(updated) => ApiResponse::success(MarkAllReadResponse { updated }),
        Err(e) => {
            error!("Failed to mark notifications read for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
