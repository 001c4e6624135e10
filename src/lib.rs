pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::event;
pub use modules::matching;
pub use modules::notification;
pub use modules::report;
pub use modules::user;

use actix_web::web;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::AuthUseCases;
use crate::event::application::EventUseCases;
use crate::matching::application::MatchingUseCases;
use crate::notification::application::NotificationUseCases;
use crate::report::application::ReportUseCases;
use crate::user::application::UserUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub event: EventUseCases,
    pub user: UserUseCases,
    pub notification: NotificationUseCases,
    pub report: ReportUseCases,
    pub matching: MatchingUseCases,
    pub session_cookie: SessionCookieConfig,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Events. Literal segments before `/events/{id}`.
    cfg.service(crate::event::adapter::incoming::web::routes::get_upcoming_events_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::get_volunteer_history_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::upsert_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::assign_volunteer_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::get_event_assignments_handler);
    // Notifications
    cfg.service(crate::notification::adapter::incoming::web::routes::list_notifications_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::mark_all_read_handler);
    // User
    cfg.service(crate::user::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    // Reports
    cfg.service(crate::report::adapter::incoming::web::routes::volunteer_activity_report_handler);
    cfg.service(crate::report::adapter::incoming::web::routes::event_assignments_report_handler);
    // Matching
    cfg.service(crate::matching::adapter::incoming::web::routes::get_matching_volunteers_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::get_matching_events_handler);
}
