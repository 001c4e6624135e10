use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::event::application::mappers::EventDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Events from now on that volunteers can be matched to
#[utoipa::path(
    get,
    path = "/matching/events",
    tag = "matching",
    responses(
        (status = 200, description = "Current and future events", body = inline(SuccessResponse<Vec<EventDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/matching/events")]
pub async fn get_matching_events_handler(data: web::Data<AppState>) -> impl Responder {
    match data.matching.events.execute().await {
        Ok(events) => ApiResponse::success(events),
        Err(e) => {
            error!("Failed to list events for matching: {}", e);
            ApiResponse::internal_error()
        }
    }
}
