use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};

/// Round-trip ISO-8601 in UTC, e.g. `2025-03-01T14:00:00.000000Z`.
pub fn to_iso_string(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Accepts RFC 3339 with any offset, a naive timestamp or a bare date.
/// Naive input is read as UTC.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn to_db(value: &DateTime<Utc>) -> DateTime<FixedOffset> {
    value.fixed_offset()
}

pub fn from_db(value: &DateTime<FixedOffset>) -> DateTime<Utc> {
    value.with_timezone(&Utc)
}

/// `#[serde(deserialize_with = "...")]` helper built on [`parse_utc`].
pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc(&raw).ok_or_else(|| serde::de::Error::custom(format!("Invalid date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso_string_is_utc_with_micros() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap();
        assert_eq!(to_iso_string(&dt), "2025-03-01T14:00:00.000000Z");
    }

    #[test]
    fn offset_input_is_normalised_to_utc() {
        let parsed = parse_utc("2025-03-01T09:00:00-05:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap());
    }

    #[test]
    fn naive_input_is_read_as_utc() {
        let parsed = parse_utc("2025-03-01T14:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap());

        let date_only = parse_utc("2025-03-01").unwrap();
        assert_eq!(date_only, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_utc("next tuesday").is_none());
    }

    #[test]
    fn db_round_trip_keeps_instant() {
        let dt = Utc.with_ymd_and_hms(2025, 7, 4, 18, 30, 0).unwrap();
        assert_eq!(from_db(&to_db(&dt)), dt);
    }
}
