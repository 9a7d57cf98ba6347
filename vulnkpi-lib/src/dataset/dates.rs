use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parse a date or timestamp field.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]` (or with a space separator),
/// and RFC 3339 timestamps, which are converted to UTC. Anything else yields `None`.
#[must_use]
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    let text = value.as_str()?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Calendar day of a date or timestamp field.
#[must_use]
pub fn parse_day(value: &Value) -> Option<NaiveDate> {
    parse_date(value).map(|dt| dt.date())
}

/// Whole days from `start` to `end`, rounded towards negative infinity.
#[must_use]
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds().div_euclid(SECONDS_PER_DAY)
}
