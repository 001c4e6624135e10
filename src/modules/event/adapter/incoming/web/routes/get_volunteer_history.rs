use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::event::application::mappers::VolunteerHistoryDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Events the current user took part in, newest first
#[utoipa::path(
    get,
    path = "/events/history",
    tag = "events",
    responses(
        (status = 200, description = "Participation history", body = inline(SuccessResponse<Vec<VolunteerHistoryDto>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/events/history")]
pub async fn get_volunteer_history_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.event.history.execute(&user.user_id).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Failed to load history for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
