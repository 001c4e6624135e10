pub mod event_repository_postgres;
pub mod sea_orm_entity;
pub mod volunteer_history_repository_postgres;

pub use event_repository_postgres::EventRepositoryPostgres;
pub use volunteer_history_repository_postgres::VolunteerHistoryRepositoryPostgres;
