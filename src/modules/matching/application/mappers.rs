use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::domain::VolunteerSkill;
use crate::user::application::domain::UserProfile;

/// What the matching screen needs to pair a volunteer with an event.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerMatchDto {
    pub id: String,
    pub name: String,
    pub skills: Vec<VolunteerSkill>,
    pub availability: Vec<String>,
}

impl From<&UserProfile> for VolunteerMatchDto {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.user_id().to_string(),
            name: format!("{} {}", profile.first_name(), profile.last_name()),
            skills: profile.skills().to_vec(),
            availability: profile.availability().to_vec(),
        }
    }
}
