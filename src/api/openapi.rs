use crate::api::schemas::{ErrorDetail, ErrorResponse, ReportAttachment, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AuthResponse, LoginRequestDto, LogoutResponse, SignupRequestDto,
};
use crate::auth::application::domain::UserRole;
use crate::event::adapter::incoming::web::routes::{
    AssignVolunteerRequestDto, UpsertEventRequestDto,
};
use crate::event::application::mappers::{EventDto, VolunteerHistoryDto};
use crate::event::application::ports::incoming::use_cases::AssignVolunteerResult;
use crate::matching::application::mappers::VolunteerMatchDto;
use crate::notification::adapter::incoming::web::routes::MarkAllReadResponse;
use crate::notification::application::ports::incoming::use_cases::NotificationDto;
use crate::shared::domain::{EventUrgency, VolunteerSkill};
use crate::user::adapter::incoming::web::routes::UpdateUserRequestDto;
use crate::user::application::mappers::UserDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Volunteer Hub API",
        version = "1.0.0",
        description = "Volunteer coordination: events, assignments, profiles, notifications and reports"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::signup_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,

        // Events
        crate::event::adapter::incoming::web::routes::get_upcoming_events_handler,
        crate::event::adapter::incoming::web::routes::get_volunteer_history_handler,
        crate::event::adapter::incoming::web::routes::upsert_event_handler,
        crate::event::adapter::incoming::web::routes::assign_volunteer_handler,
        crate::event::adapter::incoming::web::routes::get_event_assignments_handler,

        // Notifications
        crate::notification::adapter::incoming::web::routes::list_notifications_handler,
        crate::notification::adapter::incoming::web::routes::mark_all_read_handler,

        // User
        crate::user::adapter::incoming::web::routes::get_current_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,

        // Reports
        crate::report::adapter::incoming::web::routes::volunteer_activity_report_handler,
        crate::report::adapter::incoming::web::routes::event_assignments_report_handler,

        // Matching
        crate::matching::adapter::incoming::web::routes::get_matching_volunteers_handler,
        crate::matching::adapter::incoming::web::routes::get_matching_events_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AuthResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth
            LoginRequestDto,
            SignupRequestDto,
            AuthResponse,
            LogoutResponse,
            UserRole,

            // Events
            UpsertEventRequestDto,
            AssignVolunteerRequestDto,
            AssignVolunteerResult,
            EventDto,
            VolunteerHistoryDto,
            EventUrgency,
            VolunteerSkill,

            // Notifications
            NotificationDto,
            MarkAllReadResponse,

            // User
            UpdateUserRequestDto,
            UserDto,

            // Matching
            VolunteerMatchDto,

            // Reports
            ReportAttachment,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login, signup and logout"),
        (name = "events", description = "Event management and volunteer assignment"),
        (name = "notifications", description = "Per-user notifications"),
        (name = "user", description = "Current user and profile"),
        (name = "reports", description = "Admin CSV and PDF reports"),
        (name = "matching", description = "Volunteer and event lists for matching"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by /login or /signup"))
                        .build(),
                ),
            )
        }
    }
}
