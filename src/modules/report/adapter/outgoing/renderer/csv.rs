use crate::report::application::domain::{EventAssignmentReport, VolunteerActivityRow};
use crate::shared::domain::datetime::to_iso_string;

const ACTIVITY_HEADER: &str = "UserId,FullName,Email,EventId,EventName,EventDateUtc,DurationMinutes";
const ASSIGNMENTS_HEADER: &str = "EventId,EventName,EventDateUtc,Location,Urgency,RequiredSkills,UserId,FullName,Email,ParticipationDateUtc,DurationMinutes";

/// Quotes non-empty text and doubles embedded quotes. Empty stays empty.
fn escape(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn push_line(out: &mut String, fields: &[String]) {
    out.push_str(&fields.join(","));
    out.push('\n');
}

pub(super) fn volunteer_activity(rows: &[VolunteerActivityRow]) -> String {
    let mut out = String::from(ACTIVITY_HEADER);
    out.push('\n');

    for row in rows {
        push_line(
            &mut out,
            &[
                escape(&row.user_id),
                escape(&row.full_name),
                escape(&row.email),
                escape(&row.event_id),
                escape(&row.event_name),
                escape(&to_iso_string(&row.event_date_utc)),
                row.duration_minutes.to_string(),
            ],
        );
    }
    out
}

pub(super) fn event_assignments(reports: &[EventAssignmentReport]) -> String {
    let mut out = String::from(ASSIGNMENTS_HEADER);
    out.push('\n');

    for report in reports {
        let event_columns = [
            escape(&report.event_id),
            escape(&report.event_name),
            escape(&to_iso_string(&report.event_date_utc)),
            escape(&report.location),
            escape(&report.urgency),
            escape(&report.required_skills.join(";")),
        ];

        if report.volunteers.is_empty() {
            let mut fields = event_columns.to_vec();
            fields.extend(std::iter::repeat(String::new()).take(5));
            push_line(&mut out, &fields);
            continue;
        }

        for volunteer in &report.volunteers {
            let mut fields = event_columns.to_vec();
            fields.extend([
                escape(&volunteer.user_id),
                escape(&volunteer.full_name),
                escape(&volunteer.email),
                escape(&to_iso_string(&volunteer.participation_date_utc)),
                volunteer.duration_minutes.to_string(),
            ]);
            push_line(&mut out, &fields);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::application::domain::EventVolunteerRow;
    use chrono::{TimeZone, Utc};

    fn report(volunteers: Vec<EventVolunteerRow>) -> EventAssignmentReport {
        EventAssignmentReport {
            event_id: "evt-1".into(),
            event_name: "Bake \"Sale\"".into(),
            event_date_utc: Utc.with_ymd_and_hms(2025, 7, 4, 15, 30, 0).unwrap(),
            location: "Main St, Hall B".into(),
            urgency: "Medium".into(),
            required_skills: vec!["Cooking".into(), "Fundraising".into()],
            volunteers,
        }
    }

    #[test]
    fn quotes_are_doubled_and_duration_is_bare() {
        let csv = volunteer_activity(&[VolunteerActivityRow {
            user_id: "u1".into(),
            full_name: "Jo \"JJ\" Park".into(),
            email: "jo@example.com".into(),
            event_id: "evt-1".into(),
            event_name: "Cleanup, North".into(),
            event_date_utc: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            duration_minutes: 45,
        }]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], ACTIVITY_HEADER);
        assert_eq!(
            lines[1],
            "\"u1\",\"Jo \"\"JJ\"\" Park\",\"jo@example.com\",\"evt-1\",\"Cleanup, North\",\"2025-01-02T03:04:05.000000Z\",45"
        );
    }

    #[test]
    fn event_without_volunteers_has_five_empty_columns() {
        let csv = event_assignments(&[report(vec![])]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ASSIGNMENTS_HEADER);
        assert_eq!(
            lines[1],
            "\"evt-1\",\"Bake \"\"Sale\"\"\",\"2025-07-04T15:30:00.000000Z\",\"Main St, Hall B\",\"Medium\",\"Cooking;Fundraising\",,,,,"
        );
    }

    #[test]
    fn one_line_per_volunteer_repeats_event_columns() {
        let volunteer = |id: &str| EventVolunteerRow {
            user_id: id.into(),
            full_name: "No name given".into(),
            email: String::new(),
            participation_date_utc: Utc.with_ymd_and_hms(2025, 7, 4, 15, 30, 0).unwrap(),
            duration_minutes: 60,
        };

        let csv = event_assignments(&[report(vec![volunteer("u1"), volunteer("u2")])]);
        let lines: Vec<&str> = csv.lines().skip(1).collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\"evt-1\","));
        assert!(lines[1].ends_with(",\"u2\",\"No name given\",,\"2025-07-04T15:30:00.000000Z\",60"));
    }
}
