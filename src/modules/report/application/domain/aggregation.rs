use std::cmp::Ordering;
use std::collections::HashMap;

use super::report::{ActivityRecord, EventAssignmentReport, EventVolunteerRow, VolunteerActivityRow};
use crate::event::application::domain::Event;
use crate::shared::domain::skill::skill_labels;
use crate::user::application::domain::UserProfile;

const NO_NAME: &str = "No name given";

pub fn full_name(profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return NO_NAME.to_string();
    };

    let first = profile.first_name().trim();
    let last = profile.last_name().trim();

    match (first.is_empty(), last.is_empty()) {
        (true, true) => NO_NAME.to_string(),
        (true, false) => last.to_string(),
        (false, true) => first.to_string(),
        (false, false) => format!("{first} {last}"),
    }
}

/// Case-insensitive, with byte order breaking ties so the result is stable.
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// One row per history record, ordered by event date, event name, then volunteer name.
pub fn build_activity_rows(records: &[ActivityRecord]) -> Vec<VolunteerActivityRow> {
    let mut rows: Vec<VolunteerActivityRow> = records
        .iter()
        .map(|record| VolunteerActivityRow {
            user_id: record.history.user_id().to_string(),
            full_name: full_name(record.profile.as_ref()),
            email: record.email.clone(),
            event_id: record.event.id().to_string(),
            event_name: record.event.name().to_string(),
            event_date_utc: record.event.date_utc(),
            duration_minutes: record.history.duration_minutes(),
        })
        .collect();

    rows.sort_by(|a, b| {
        a.event_date_utc
            .cmp(&b.event_date_utc)
            .then_with(|| name_order(&a.event_name, &b.event_name))
            .then_with(|| name_order(&a.full_name, &b.full_name))
    });
    rows
}

fn report_shell(event: &Event) -> EventAssignmentReport {
    let mut required_skills = skill_labels(event.required_skills());
    required_skills.sort();

    EventAssignmentReport {
        event_id: event.id().to_string(),
        event_name: event.name().to_string(),
        event_date_utc: event.date_utc(),
        location: event.location().to_string(),
        urgency: event.urgency().to_string(),
        required_skills,
        volunteers: Vec::new(),
    }
}

/// Groups history records by event and appends scheduled events nobody worked.
///
/// Groups are ordered by event date then name; volunteers inside a group by
/// participation date then name.
pub fn build_event_reports(
    records: &[ActivityRecord],
    scheduled: &[Event],
) -> Vec<EventAssignmentReport> {
    let mut reports: Vec<EventAssignmentReport> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *index
            .entry(record.event.id().to_string())
            .or_insert_with(|| {
                reports.push(report_shell(&record.event));
                reports.len() - 1
            });

        reports[slot].volunteers.push(EventVolunteerRow {
            user_id: record.history.user_id().to_string(),
            full_name: full_name(record.profile.as_ref()),
            email: record.email.clone(),
            participation_date_utc: record.history.date_utc(),
            duration_minutes: record.history.duration_minutes(),
        });
    }

    for event in scheduled {
        if !index.contains_key(event.id()) {
            index.insert(event.id().to_string(), reports.len());
            reports.push(report_shell(event));
        }
    }

    for report in &mut reports {
        report.volunteers.sort_by(|a, b| {
            a.participation_date_utc
                .cmp(&b.participation_date_utc)
                .then_with(|| name_order(&a.full_name, &b.full_name))
        });
    }

    reports.sort_by(|a, b| {
        a.event_date_utc
            .cmp(&b.event_date_utc)
            .then_with(|| name_order(&a.event_name, &b.event_name))
    });
    reports
}
