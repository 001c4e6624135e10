use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::adapter::incoming::web::session_cookie::apply_session;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub signed_out: bool,
}

/// Sign out and clear the session cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<LogoutResponse>)),
        (status = 400, description = "Token without subject", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/logout")]
pub async fn logout_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(&user.user_id).await {
        Ok(directive) => apply_session(
            ApiResponse::success(LogoutResponse { signed_out: true }),
            &directive,
            &data.session_cookie,
        ),
        Err(e) => {
            warn!("Logout rejected: {}", e);
            ApiResponse::bad_request("INVALID_SESSION", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::services::LogoutService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, read_json, token_provider_data};
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn logout_clears_cookie() {
        let state = TestAppStateBuilder::default()
            .with_logout(LogoutService::new())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(logout_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/logout")
            .insert_header(bearer_for("vol-3"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "auth_token")
            .expect("removal cookie");
        assert_eq!(cookie.value(), "");

        let body = read_json(resp).await;
        assert_eq!(body["data"]["signedOut"], true);
    }

    #[actix_web::test]
    async fn logout_requires_session() {
        let state = TestAppStateBuilder::default()
            .with_logout(LogoutService::new())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(logout_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
