use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::matching::application::mappers::VolunteerMatchDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Volunteers with their skills and availability
#[utoipa::path(
    get,
    path = "/matching/volunteers",
    tag = "matching",
    responses(
        (status = 200, description = "Volunteer profiles", body = inline(SuccessResponse<Vec<VolunteerMatchDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/matching/volunteers")]
pub async fn get_matching_volunteers_handler(data: web::Data<AppState>) -> impl Responder {
    match data.matching.volunteers.execute().await {
        Ok(volunteers) => ApiResponse::success(volunteers),
        Err(e) => {
            error!("Failed to list volunteers for matching: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::application::ports::incoming::use_cases::{
        GetMatchingVolunteersError, GetMatchingVolunteersUseCase,
    };
    use crate::shared::domain::VolunteerSkill;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct OneVolunteer;

    #[async_trait]
    impl GetMatchingVolunteersUseCase for OneVolunteer {
        async fn execute(&self) -> Result<Vec<VolunteerMatchDto>, GetMatchingVolunteersError> {
            Ok(vec![VolunteerMatchDto {
                id: "vol-1".into(),
                name: "Ana Reyes".into(),
                skills: vec![VolunteerSkill::ItSupport],
                availability: vec!["Monday".into()],
            }])
        }
    }

    #[actix_web::test]
    async fn anonymous_caller_sees_volunteers() {
        // Deny-all authorizer: the route must not consult it.
        let state = TestAppStateBuilder::default()
            .with_matching_volunteers(OneVolunteer)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_matching_volunteers_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/matching/volunteers")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["name"], "Ana Reyes");
        assert_eq!(json["data"][0]["skills"][0], "ITSupport");
        assert_eq!(json["data"][0]["availability"][0], "Monday");
    }
}
