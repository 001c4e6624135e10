use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::{UserCredentials, UserRole};
use crate::shared::domain::VolunteerSkill;
use crate::user::application::domain::UserProfile;

/// Credentials plus profile. Profile fields are empty until the user saves one.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address_one: String,
    pub address_two: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub skills: Vec<VolunteerSkill>,
    pub preferences: String,
    pub availability: Vec<String>,
    pub role: UserRole,
}

pub fn to_user_dto(credentials: &UserCredentials, profile: Option<&UserProfile>) -> UserDto {
    let mut dto = UserDto {
        id: credentials.id().to_string(),
        email: credentials.email().to_string(),
        first_name: String::new(),
        last_name: String::new(),
        address_one: String::new(),
        address_two: None,
        city: String::new(),
        state: String::new(),
        zip_code: String::new(),
        skills: Vec::new(),
        preferences: String::new(),
        availability: Vec::new(),
        role: credentials.role(),
    };

    if let Some(profile) = profile {
        let details = profile.details().clone();
        dto.first_name = details.first_name;
        dto.last_name = details.last_name;
        dto.address_one = details.address_one;
        dto.address_two = details.address_two;
        dto.city = details.city;
        dto.state = details.state;
        dto.zip_code = details.zip_code;
        dto.skills = details.skills;
        dto.preferences = details.preferences;
        dto.availability = details.availability;
    }

    dto
}
