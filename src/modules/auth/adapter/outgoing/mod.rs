pub mod credentials_repository_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_read_store_postgres;

pub use credentials_repository_postgres::CredentialsRepositoryPostgres;
pub use jwt::{JwtConfig, JwtTokenService};
pub use security::Argon2Hasher;
pub use user_read_store_postgres::UserReadStorePostgres;
