pub mod volunteer_directory;

pub use volunteer_directory::{VolunteerDirectory, VolunteerDirectoryError};
