use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AdminPolicy, Authorized};
use crate::event::application::mappers::EventDto;
use crate::event::application::ports::incoming::use_cases::{UpsertEventCommand, UpsertEventError};
use crate::shared::api::ApiResponse;
use crate::shared::domain::datetime::deserialize_utc;
use crate::AppState;

/// Path segment that never conflicts with the body id.
const NEW_EVENT_PATH_ID: &str = "new";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEventRequestDto {
    /// Omit or leave blank to create a new event
    pub id: Option<String>,

    #[schema(example = "Food Drive")]
    pub name: String,

    #[schema(example = "Sort and pack donated food")]
    pub description: String,

    #[schema(example = "Community Center, Hall B")]
    pub location: String,

    /// RFC 3339; timestamps without offset are read as UTC
    #[serde(deserialize_with = "deserialize_utc")]
    #[schema(value_type = String, example = "2025-11-20T15:00:00Z")]
    pub date_utc: DateTime<Utc>,

    #[schema(example = "High")]
    pub urgency: String,

    #[serde(default)]
    #[schema(example = json!(["Cooking", "Driving"]))]
    pub required_skills: Vec<String>,
}

fn conflicts_with_path(path_id: &str, body_id: Option<&str>) -> bool {
    let path_id = path_id.trim();
    match body_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(body_id) => !path_id.eq_ignore_ascii_case(NEW_EVENT_PATH_ID) && body_id != path_id,
        None => false,
    }
}

/// Create or update an event
///
/// The body `id` decides between create and update. A non-`new` path id
/// must match it.
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event id, or `new`")),
    request_body = UpsertEventRequestDto,
    responses(
        (status = 200, description = "Saved event", body = inline(SuccessResponse<EventDto>)),
        (status = 400, description = "Invalid urgency, skill or blank field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Admins only", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/events/{id}")]
pub async fn upsert_event_handler(
    caller: Authorized<AdminPolicy>,
    path: web::Path<String>,
    req: web::Json<UpsertEventRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let path_id = path.into_inner();
    let dto = req.into_inner();

    if conflicts_with_path(&path_id, dto.id.as_deref()) {
        warn!(path_id = %path_id, "Event id in body does not match path");
        return ApiResponse::bad_request("ID_MISMATCH", "Event id in body does not match the URL.");
    }

    let command = UpsertEventCommand {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        location: dto.location,
        date_utc: dto.date_utc,
        urgency: dto.urgency,
        required_skills: dto.required_skills,
    };

    match data.event.upsert.execute(command).await {
        Ok(event) => {
            info!(event_id = %event.id, admin_id = %caller.user_id, "Event saved");
            ApiResponse::success(event)
        }
        Err(UpsertEventError::Validation(message)) => ApiResponse::validation_error(&message),
        Err(e @ UpsertEventError::EventNotFound(_)) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", &e.to_string())
        }
        Err(e) => {
            error!("Failed to save event: {}", e);
            ApiResponse::internal_error()
        }
    }
}
