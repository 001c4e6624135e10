use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::domain::PatchField;
use crate::user::application::mappers::UserDto;
use crate::user::application::ports::incoming::use_cases::{UpdateUserError, UpdateUserPatch};
use crate::AppState;

/// Omitted keys keep their stored value, `null` clears optional fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequestDto {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Maria")]
    pub first_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Lopez")]
    pub last_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address_one: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address_two: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub city: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "TX")]
    pub state: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "77002")]
    pub zip_code: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>, example = json!(["Cooking", "Driving"]))]
    pub skills: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub preferences: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>, example = json!(["Saturday"]))]
    pub availability: PatchField<Vec<String>>,
}

impl From<UpdateUserRequestDto> for UpdateUserPatch {
    fn from(dto: UpdateUserRequestDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            address_one: dto.address_one,
            address_two: dto.address_two,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
            skills: dto.skills,
            preferences: dto.preferences,
            availability: dto.availability,
        }
    }
}

/// Create or update the current user's profile
#[utoipa::path(
    put,
    path = "/user",
    tag = "user",
    request_body = UpdateUserRequestDto,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserDto>)),
        (status = 400, description = "Missing or invalid profile fields", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/user")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = UpdateUserPatch::from(req.into_inner());

    match data.user.update.execute(&user.user_id, patch).await {
        Ok(dto) => ApiResponse::success(dto),
        Err(e @ UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", &e.to_string())
        }
        Err(
            e @ (UpdateUserError::MissingRequiredFields
            | UpdateUserError::CannotClearField(_)
            | UpdateUserError::Validation(_)),
        ) => {
            warn!("Profile update rejected for {}: {}", user.user_id, e);
            ApiResponse::validation_error(&e.to_string())
        }
        Err(e) => {
            error!("Failed to update profile for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, read_json, token_provider_data};
    use crate::user::application::ports::incoming::use_cases::UpdateUserUseCase;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recording {
        seen: Arc<Mutex<Option<UpdateUserPatch>>>,
        fail_with: Option<UpdateUserError>,
    }

    #[async_trait]
    impl UpdateUserUseCase for Recording {
        async fn execute(
            &self,
            user_id: &str,
            patch: UpdateUserPatch,
        ) -> Result<UserDto, UpdateUserError> {
            *self.seen.lock().unwrap() = Some(patch.clone());
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            Ok(UserDto {
                id: user_id.to_string(),
                email: "vol@example.com".to_string(),
                first_name: patch.first_name.into_value().unwrap_or_default(),
                last_name: String::new(),
                address_one: String::new(),
                address_two: None,
                city: String::new(),
                state: String::new(),
                zip_code: String::new(),
                skills: vec![],
                preferences: String::new(),
                availability: vec![],
                role: UserRole::Volunteer,
            })
        }
    }

    async fn put_as_volunteer(
        use_case: Recording,
        json: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_update_user(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/user")
            .insert_header(bearer_for("vol-1"))
            .set_json(json)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn omitted_null_and_value_reach_use_case() {
        let use_case = Recording::default();
        let seen = Arc::clone(&use_case.seen);

        let resp = put_as_volunteer(
            use_case,
            serde_json::json!({ "firstName": "Maria", "addressTwo": null }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let patch = seen.lock().unwrap().clone().unwrap();
        assert_eq!(patch.first_name, PatchField::Value("Maria".to_string()));
        assert_eq!(patch.address_two, PatchField::Null);
        assert_eq!(patch.city, PatchField::Unset);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["firstName"], "Maria");
    }

    #[actix_web::test]
    async fn validation_failures_are_400() {
        for error in [
            UpdateUserError::MissingRequiredFields,
            UpdateUserError::CannotClearField("City"),
            UpdateUserError::Validation("Invalid skill value 'x'.".into()),
        ] {
            let expected = error.to_string();
            let resp = put_as_volunteer(
                Recording {
                    fail_with: Some(error),
                    ..Default::default()
                },
                serde_json::json!({}),
            )
            .await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let json = read_json(resp).await;
            assert_eq!(json["error"]["message"], expected);
        }
    }

    #[actix_web::test]
    async fn missing_account_is_404() {
        let resp = put_as_volunteer(
            Recording {
                fail_with: Some(UpdateUserError::UserNotFound),
                ..Default::default()
            },
            serde_json::json!({ "city": "Austin" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
