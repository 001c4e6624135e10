use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::event::application::mappers::EventDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Events scheduled after now, soonest first
#[utoipa::path(
    get,
    path = "/events/upcoming",
    tag = "events",
    responses(
        (status = 200, description = "Upcoming events", body = inline(SuccessResponse<Vec<EventDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/events/upcoming")]
pub async fn get_upcoming_events_handler(data: web::Data<AppState>) -> impl Responder {
    match data.event.upcoming.execute().await {
        Ok(events) => ApiResponse::success(events),
        Err(e) => {
            error!("Failed to load upcoming events: {}", e);
            ApiResponse::internal_error()
        }
    }
}
