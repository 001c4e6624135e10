use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AdminPolicy, Authorized};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Ids of the volunteers assigned to an event
#[utoipa::path(
    get,
    path = "/events/{eventId}/assignments",
    tag = "events",
    params(("eventId" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Distinct volunteer ids", body = inline(SuccessResponse<Vec<String>>)),
        (status = 403, description = "Admins only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/events/{event_id}/assignments")]
pub async fn get_event_assignments_handler(
    _caller: Authorized<AdminPolicy>,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.assignments.execute(&event_id).await {
        Ok(ids) => ApiResponse::success(ids),
        Err(e) => {
            error!("Failed to list assignments for {}: {}", event_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::application::ports::incoming::use_cases::{
        GetEventAssignmentsError, GetEventAssignmentsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, read_json, token_provider_data};
    use crate::tests::support::stubs::StubAuthorizeUseCase;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct TwoVolunteers;

    #[async_trait]
    impl GetEventAssignmentsUseCase for TwoVolunteers {
        async fn execute(&self, event_id: &str) -> Result<Vec<String>, GetEventAssignmentsError> {
            Ok(vec![format!("{event_id}-vol-a"), format!("{event_id}-vol-b")])
        }
    }

    #[actix_web::test]
    async fn lists_ids_for_path_event() {
        let state = TestAppStateBuilder::default()
            .with_authorize(StubAuthorizeUseCase::granting(&["admin-1"]))
            .with_event_assignments(TwoVolunteers)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(get_event_assignments_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/events/evt-3/assignments")
            .insert_header(bearer_for("admin-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"], serde_json::json!(["evt-3-vol-a", "evt-3-vol-b"]));
    }
}
