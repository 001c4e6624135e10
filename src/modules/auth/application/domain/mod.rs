pub mod entities;

pub use entities::{AuthOutcome, AuthUser, SessionDirective, UserCredentials, UserRole};
