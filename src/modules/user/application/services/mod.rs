mod get_current_user_service;
mod update_user_service;

pub use get_current_user_service::GetCurrentUserService;
pub use update_user_service::UpdateUserService;
