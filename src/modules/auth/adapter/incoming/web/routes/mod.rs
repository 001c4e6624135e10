mod auth_response;
mod login;
mod logout;
mod signup;

pub use auth_response::*;
pub use login::*;
pub use logout::*;
pub use signup::*;
