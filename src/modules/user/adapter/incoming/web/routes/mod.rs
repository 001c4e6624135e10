mod get_current_user;
mod update_user;

pub use get_current_user::*;
pub use update_user::*;
