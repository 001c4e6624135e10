use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::AuthResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::session_cookie::apply_session;
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "volunteer@example.com")]
    pub email: String,

    #[schema(example = "Volunteer123!")]
    pub password: String,
}

/// Sign in with email and password
///
/// On success the session token is set as the HTTP-only `auth_token` cookie.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    info!(email = %dto.email.trim(), "Login attempt");

    let command = LoginCommand {
        email: dto.email,
        password: dto.password,
    };

    match data.auth.login.execute(command).await {
        Ok(outcome) => {
            info!(user_id = %outcome.user.id, "User logged in successfully");
            apply_session(
                ApiResponse::success(AuthResponse::from(outcome.user)),
                &outcome.session,
                &data.session_cookie,
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &LoginError::InvalidCredentials.to_string())
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{AuthOutcome, AuthUser, SessionDirective, UserRole};
    use crate::auth::application::ports::incoming::use_cases::LoginUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLoginSuccess;

    #[async_trait]
    impl LoginUseCase for MockLoginSuccess {
        async fn execute(&self, command: LoginCommand) -> Result<AuthOutcome, LoginError> {
            Ok(AuthOutcome {
                user: AuthUser {
                    id: "a1b2".to_string(),
                    email: command.email.trim().to_lowercase(),
                    role: UserRole::Admin,
                },
                session: SessionDirective::Issue {
                    token: "signed.jwt.token".to_string(),
                    max_age_minutes: 60,
                },
            })
        }
    }

    #[derive(Clone)]
    struct MockLoginFailure(LoginError);

    #[async_trait]
    impl LoginUseCase for MockLoginFailure {
        async fn execute(&self, _command: LoginCommand) -> Result<AuthOutcome, LoginError> {
            Err(self.0.clone())
        }
    }

    fn login_body() -> serde_json::Value {
        serde_json::json!({
            "email": "Admin@Example.com",
            "password": "Admin123!"
        })
    }

    #[actix_web::test]
    async fn test_login_success_sets_cookie() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginSuccess)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(login_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "auth_token")
            .expect("session cookie");
        assert_eq!(cookie.value(), "signed.jwt.token");
        assert_eq!(cookie.http_only(), Some(true));

        let body = read_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "a1b2");
        assert_eq!(body["data"]["email"], "admin@example.com");
        assert_eq!(body["data"]["role"], "Admin");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginFailure(LoginError::InvalidCredentials))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(login_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.response().cookies().next().is_none());

        let body = read_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password.");
    }

    #[actix_web::test]
    async fn test_login_infrastructure_failure_is_500() {
        for error in [
            LoginError::QueryError("pool exhausted".to_string()),
            LoginError::HashingError("argon2".to_string()),
            LoginError::TokenError("signing".to_string()),
        ] {
            let app_state = TestAppStateBuilder::default()
                .with_login(MockLoginFailure(error))
                .build();

            let app =
                test::init_service(App::new().app_data(app_state).service(login_handler)).await;

            let req = test::TestRequest::post()
                .uri("/login")
                .set_json(login_body())
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = read_json(resp).await;
            assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_login_malformed_body_is_validation_error() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "email": "only@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
