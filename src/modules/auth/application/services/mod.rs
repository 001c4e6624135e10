mod authorization_service;
mod login_service;
mod logout_service;
mod signup_service;

pub use authorization_service::AuthorizationService;
pub use login_service::LoginService;
pub use logout_service::LogoutService;
pub use signup_service::{SignupService, WELCOME_MESSAGE};
