use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::AuthResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::session_cookie::apply_session;
use crate::auth::application::ports::incoming::use_cases::{SignupCommand, SignupError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[schema(example = "new.volunteer@example.com")]
    pub email: String,

    /// At least 8 characters
    #[schema(example = "Volunteer123!")]
    pub password: String,
}

/// Create a volunteer account
///
/// Signs the new user in and leaves a welcome notification in their inbox.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (status = 200, description = "Account created", body = inline(SuccessResponse<AuthResponse>)),
        (status = 400, description = "Invalid email or weak password", body = ErrorResponse),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "A user with this email already exists."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match SignupCommand::new(&dto.email, &dto.password) {
        Ok(command) => command,
        Err(e) => {
            warn!("Signup rejected: {}", e);
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    match data.auth.signup.execute(command).await {
        Ok(outcome) => {
            info!(user_id = %outcome.user.id, "Volunteer signed up");
            apply_session(
                ApiResponse::success(AuthResponse::from(outcome.user)),
                &outcome.session,
                &data.session_cookie,
            )
        }

        Err(e @ SignupError::EmailAlreadyExists) => {
            warn!("Signup rejected: duplicate email");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", &e.to_string())
        }

        Err(e @ (SignupError::InvalidEmail(_) | SignupError::WeakPassword(_))) => {
            ApiResponse::validation_error(&e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}
