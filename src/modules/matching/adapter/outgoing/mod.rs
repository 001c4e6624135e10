pub mod volunteer_directory_postgres;

pub use volunteer_directory_postgres::VolunteerDirectoryPostgres;
