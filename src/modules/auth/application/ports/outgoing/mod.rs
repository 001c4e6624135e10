pub mod credentials_repository;
pub mod password_hasher;
pub mod token_provider;
pub mod user_read_store;

pub use credentials_repository::{CredentialsRepository, CredentialsRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
pub use user_read_store::{UserReadStore, UserReadStoreError};
