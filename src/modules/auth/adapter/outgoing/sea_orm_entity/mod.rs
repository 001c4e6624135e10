pub mod user_credentials;
