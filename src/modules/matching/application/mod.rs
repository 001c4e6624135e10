pub mod mappers;
pub mod matching_use_cases;
pub mod ports;
pub mod services;

pub use matching_use_cases::MatchingUseCases;
