use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AdminPolicy, Authorized};
use crate::event::application::ports::incoming::use_cases::{
    AssignVolunteerCommand, AssignVolunteerError, AssignVolunteerResult,
    DEFAULT_ASSIGNMENT_MINUTES,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn default_duration() -> i32 {
    DEFAULT_ASSIGNMENT_MINUTES
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignVolunteerRequestDto {
    #[serde(default)]
    pub volunteer_id: String,

    /// Defaults to 60
    #[serde(default = "default_duration")]
    #[schema(example = 90)]
    pub duration_minutes: i32,
}

/// Assign a volunteer to an event
///
/// Repeating the call for the same volunteer returns the existing
/// assignment unchanged.
#[utoipa::path(
    post,
    path = "/events/{eventId}/assign-volunteer",
    tag = "events",
    params(("eventId" = String, Path, description = "Event id")),
    request_body = AssignVolunteerRequestDto,
    responses(
        (status = 200, description = "Assignment", body = inline(SuccessResponse<AssignVolunteerResult>)),
        (status = 400, description = "Missing volunteer id or invalid duration", body = ErrorResponse),
        (status = 403, description = "Admins only", body = ErrorResponse),
        (status = 404, description = "Unknown event or volunteer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/events/{event_id}/assign-volunteer")]
pub async fn assign_volunteer_handler(
    _caller: Authorized<AdminPolicy>,
    path: web::Path<String>,
    req: web::Json<AssignVolunteerRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();
    let dto = req.into_inner();

    if dto.volunteer_id.trim().is_empty() {
        return ApiResponse::validation_error("VolunteerId is required.");
    }

    let command = AssignVolunteerCommand {
        event_id,
        volunteer_id: dto.volunteer_id.trim().to_string(),
        duration_minutes: dto.duration_minutes,
    };

    match data.event.assign_volunteer.execute(command).await {
        Ok(Some(result)) => ApiResponse::success(result),
        Ok(None) => {
            warn!("Assignment target not found");
            ApiResponse::not_found("NOT_FOUND", "Event or volunteer not found.")
        }
        Err(AssignVolunteerError::Validation(message)) => ApiResponse::validation_error(&message),
        Err(e) => {
            error!("Failed to assign volunteer: {}", e);
            ApiResponse::internal_error()
        }
    }
}
