use chrono::{DateTime, Utc};

use crate::shared::domain::{
    dedupe_skills,
    errors::{require_text, require_text_max},
    new_id, DomainError, EventUrgency, VolunteerSkill,
};

const NAME_MAX: usize = 200;
const LOCATION_MAX: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: String,
    name: String,
    description: String,
    location: String,
    date_utc: DateTime<Utc>,
    urgency: EventUrgency,
    required_skills: Vec<VolunteerSkill>,
}

/// Validated text fields shared by construction and `update_details`.
struct Details {
    name: String,
    description: String,
    location: String,
}

fn validate_details(name: &str, description: &str, location: &str) -> Result<Details, DomainError> {
    Ok(Details {
        name: require_text_max("Name", name, NAME_MAX)?,
        description: require_text("Description", description)?,
        location: require_text_max("Location", location, LOCATION_MAX)?,
    })
}

impl Event {
    pub fn new(
        name: &str,
        description: &str,
        location: &str,
        date_utc: DateTime<Utc>,
        urgency: EventUrgency,
        required_skills: Vec<VolunteerSkill>,
    ) -> Result<Self, DomainError> {
        Self::rehydrate(
            new_id(),
            name,
            description,
            location,
            date_utc,
            urgency,
            required_skills,
        )
    }

    pub fn rehydrate(
        id: String,
        name: &str,
        description: &str,
        location: &str,
        date_utc: DateTime<Utc>,
        urgency: EventUrgency,
        required_skills: Vec<VolunteerSkill>,
    ) -> Result<Self, DomainError> {
        let id = require_text("Event id", &id)?;
        let details = validate_details(name, description, location)?;

        Ok(Self {
            id,
            name: details.name,
            description: details.description,
            location: details.location,
            date_utc,
            urgency,
            required_skills: dedupe_skills(required_skills),
        })
    }

    /// All-or-nothing: a blank field leaves the event untouched.
    pub fn update_details(
        &mut self,
        name: &str,
        description: &str,
        location: &str,
        urgency: EventUrgency,
    ) -> Result<(), DomainError> {
        let details = validate_details(name, description, location)?;

        self.name = details.name;
        self.description = details.description;
        self.location = details.location;
        self.urgency = urgency;
        Ok(())
    }

    pub fn reschedule(&mut self, date_utc: DateTime<Utc>) {
        self.date_utc = date_utc;
    }

    pub fn set_required_skills(&mut self, skills: Vec<VolunteerSkill>) {
        self.required_skills = dedupe_skills(skills);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date_utc(&self) -> DateTime<Utc> {
        self.date_utc
    }

    pub fn urgency(&self) -> EventUrgency {
        self.urgency
    }

    pub fn required_skills(&self) -> &[VolunteerSkill] {
        &self.required_skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn food_drive() -> Event {
        Event::new(
            " Food Drive ",
            "Sort and pack donations",
            "Community Center",
            Utc.with_ymd_and_hms(2025, 11, 20, 15, 0, 0).unwrap(),
            EventUrgency::High,
            vec![
                VolunteerSkill::Cooking,
                VolunteerSkill::Driving,
                VolunteerSkill::Cooking,
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_event_trims_and_dedupes() {
        let event = food_drive();

        assert_eq!(event.id().len(), 32);
        assert_eq!(event.name(), "Food Drive");
        assert_eq!(
            event.required_skills(),
            &[VolunteerSkill::Cooking, VolunteerSkill::Driving]
        );
    }

    #[test]
    fn blank_fields_are_named() {
        let date = Utc::now();

        assert_eq!(
            Event::new("", "d", "l", date, EventUrgency::Low, vec![]),
            Err(DomainError::BlankField("Name"))
        );
        assert_eq!(
            Event::new("n", " ", "l", date, EventUrgency::Low, vec![]),
            Err(DomainError::BlankField("Description"))
        );
        assert_eq!(
            Event::new("n", "d", "\t", date, EventUrgency::Low, vec![]),
            Err(DomainError::BlankField("Location"))
        );
    }

    #[test]
    fn name_and_location_respect_column_lengths() {
        let date = Utc::now();

        assert_eq!(
            Event::new(&"x".repeat(201), "d", "l", date, EventUrgency::Low, vec![]),
            Err(DomainError::TooLong {
                field: "Name",
                max: 200
            })
        );
        assert_eq!(
            Event::new("n", "d", &"y".repeat(256), date, EventUrgency::Low, vec![]),
            Err(DomainError::TooLong {
                field: "Location",
                max: 255
            })
        );
        assert!(Event::new(
            &"x".repeat(200),
            "d",
            &"y".repeat(255),
            date,
            EventUrgency::Low,
            vec![]
        )
        .is_ok());

        let mut event = food_drive();
        let before = event.clone();
        assert!(event
            .update_details(&"x".repeat(201), "d", "l", EventUrgency::Low)
            .is_err());
        assert_eq!(event, before);
    }

    #[test]
    fn failed_update_leaves_event_untouched() {
        let mut event = food_drive();
        let before = event.clone();

        let result = event.update_details("Renamed", "", "Elsewhere", EventUrgency::Low);

        assert_eq!(result, Err(DomainError::BlankField("Description")));
        assert_eq!(event, before);
    }

    #[test]
    fn update_reschedule_and_skills() {
        let mut event = food_drive();
        let new_date = Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap();

        event
            .update_details("Winter Drive", "Coats", "Depot", EventUrgency::Critical)
            .unwrap();
        event.reschedule(new_date);
        event.set_required_skills(vec![VolunteerSkill::Driving, VolunteerSkill::Driving]);

        assert_eq!(event.name(), "Winter Drive");
        assert_eq!(event.urgency(), EventUrgency::Critical);
        assert_eq!(event.date_utc(), new_date);
        assert_eq!(event.required_skills(), &[VolunteerSkill::Driving]);
    }
}
