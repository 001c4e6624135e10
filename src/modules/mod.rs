pub mod auth;
pub mod event;
pub mod matching;
pub mod notification;
pub mod report;
pub mod user;
