pub mod authorize;
pub mod login;
pub mod logout;
pub mod signup;

pub use authorize::{AuthorizationDecision, AuthorizationError, AuthorizeUseCase, Requirement};
pub use login::{LoginCommand, LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use signup::{SignupCommand, SignupError, SignupUseCase};
