use crate::shared::domain::{
    dedupe_skills, errors::require_text, errors::require_text_max, DomainError, VolunteerSkill,
};

const NAME_MAX: usize = 100;
const ADDRESS_MAX: usize = 255;
const CITY_MAX: usize = 100;
const STATE_MAX: usize = 2;
const ZIP_MAX: usize = 9;

/// Editable part of a profile, before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileDetails {
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
}

/// Trims entries, drops blanks and keeps the first occurrence of each value.
fn normalize_availability(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for slot in raw {
        let slot = slot.trim();
        if !slot.is_empty() && !out.iter().any(|existing| existing == slot) {
            out.push(slot.to_string());
        }
    }
    out
}

impl ProfileDetails {
    fn validated(self) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: require_text_max("First name", &self.first_name, NAME_MAX)?,
            last_name: require_text_max("Last name", &self.last_name, NAME_MAX)?,
            address_one: require_text_max("AddressOne", &self.address_one, ADDRESS_MAX)?,
            address_two: match self.address_two.as_deref().map(str::trim) {
                Some(two) if !two.is_empty() => {
                    Some(require_text_max("AddressTwo", two, ADDRESS_MAX)?)
                }
                _ => None,
            },
            city: require_text_max("City", &self.city, CITY_MAX)?,
            state: require_text_max("State", &self.state, STATE_MAX)?,
            zip_code: require_text_max("ZipCode", &self.zip_code, ZIP_MAX)?,
            skills: dedupe_skills(self.skills),
            preferences: self.preferences.trim().to_string(),
            availability: normalize_availability(self.availability),
        })
    }
}

/// Volunteer profile, keyed 1:1 by the owning credentials id.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    user_id: String,
    details: ProfileDetails,
}

impl UserProfile {
    pub fn new(user_id: &str, details: ProfileDetails) -> Result<Self, DomainError> {
        Ok(Self {
            user_id: require_text("UserCredentialsId", user_id)?,
            details: details.validated()?,
        })
    }

    pub fn rehydrate(user_id: &str, details: ProfileDetails) -> Result<Self, DomainError> {
        Self::new(user_id, details)
    }

    /// Replaces every editable field. Leaves the profile untouched on error.
    pub fn update_profile(&mut self, details: ProfileDetails) -> Result<(), DomainError> {
        self.details = details.validated()?;
        Ok(())
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn details(&self) -> &ProfileDetails {
        &self.details
    }

    pub fn first_name(&self) -> &str {
        &self.details.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.details.last_name
    }

    pub fn address_one(&self) -> &str {
        &self.details.address_one
    }

    pub fn address_two(&self) -> Option<&str> {
        self.details.address_two.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.details.city
    }

    pub fn state(&self) -> &str {
        &self.details.state
    }

    pub fn zip_code(&self) -> &str {
        &self.details.zip_code
    }

    pub fn skills(&self) -> &[VolunteerSkill] {
        &self.details.skills
    }

    pub fn preferences(&self) -> &str {
        &self.details.preferences
    }

    pub fn availability(&self) -> &[String] {
        &self.details.availability
    }
}
