pub mod auth;
pub mod policy;

pub use auth::{AuthenticatedUser, SESSION_COOKIE};
pub use policy::{AccessPolicy, AdminPolicy, Authorized, UserPolicy};
