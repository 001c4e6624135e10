use serde::Serialize;
use utoipa::ToSchema;

use crate::event::application::domain::{Event, VolunteerHistory};
use crate::shared::domain::{datetime::to_iso_string, skill::skill_labels, EventUrgency};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    #[schema(example = "2025-11-20T15:00:00.000000Z")]
    pub date_iso_string: String,
    pub urgency: EventUrgency,
    #[schema(example = json!(["Cooking", "Driving"]))]
    pub required_skills: Vec<String>,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            name: event.name().to_string(),
            description: event.description().to_string(),
            location: event.location().to_string(),
            date_iso_string: to_iso_string(&event.date_utc()),
            urgency: event.urgency(),
            required_skills: skill_labels(event.required_skills()),
        }
    }
}

/// An event as seen from one volunteer's participation record.
/// `id` is the event id and `date_iso_string` the participation date.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerHistoryDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_iso_string: String,
    pub urgency: EventUrgency,
    pub required_skills: Vec<String>,
    #[schema(example = "2 hours 5 minutes")]
    pub time_at_event: String,
}

pub fn to_history_dto(history: &VolunteerHistory, event: &Event) -> VolunteerHistoryDto {
    VolunteerHistoryDto {
        id: event.id().to_string(),
        name: event.name().to_string(),
        description: event.description().to_string(),
        location: event.location().to_string(),
        date_iso_string: to_iso_string(&history.date_utc()),
        urgency: event.urgency(),
        required_skills: skill_labels(event.required_skills()),
        time_at_event: format_duration(history.duration_minutes()),
    }
}

fn plural(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human readable duration, e.g. `"1 hour 1 minute"`.
pub fn format_duration(duration_minutes: i32) -> String {
    if duration_minutes <= 0 {
        return "0 minutes".to_string();
    }
    if duration_minutes < 60 {
        return plural(duration_minutes, "minute");
    }

    let hours = duration_minutes / 60;
    let minutes = duration_minutes % 60;

    if minutes == 0 {
        plural(hours, "hour")
    } else {
        format!("{} {}", plural(hours, "hour"), plural(minutes, "minute"))
    }
}
