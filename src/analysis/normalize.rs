use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::warn;
use serde_json::Value;

use crate::types::{RawUsagePoint, UsagePoint};

/// Normalize raw billing query output into cleaned usage points.
///
/// Points with timestamps that do not parse as dates are dropped rather
/// than surfaced as errors; a chart with partial data beats no chart when
/// upstream sends the occasional malformed record. Null or non-numeric
/// values coerce to zero, and negative values clamp to zero.
pub fn normalize_points(raw: &[RawUsagePoint]) -> Vec<UsagePoint> {
    let mut cleaned = Vec::with_capacity(raw.len());
    for point in raw {
        if let Some(point) = normalize_one(&point.time, &point.value) {
            cleaned.push(point);
        }
    }
    cleaned
}

/// Normalize a loosely-typed JSON array (e.g. straight out of a GraphQL
/// response) into cleaned usage points.
///
/// Entries that are not objects are dropped. Each object may carry its
/// timestamp under either `time` or `timestamp`.
pub fn normalize_values(raw: &[Value]) -> Vec<UsagePoint> {
    let mut cleaned = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some(object) = entry.as_object() else {
            warn!("dropping non-object usage entry: {}", entry);
            continue;
        };
        let time = object
            .get("time")
            .or_else(|| object.get("timestamp"))
            .unwrap_or(&Value::Null);
        let value = object.get("value").unwrap_or(&Value::Null);
        if let Some(point) = normalize_one(time, value) {
            cleaned.push(point);
        }
    }
    cleaned
}

fn normalize_one(time: &Value, value: &Value) -> Option<UsagePoint> {
    let Some(time) = parse_timestamp(time) else {
        warn!("dropping usage point with unparseable timestamp: {}", time);
        return None;
    };
    Some(UsagePoint {
        time,
        value: coerce_value(value),
    })
}

/// Parse a loosely-typed timestamp field, accepting RFC 3339 as well as
/// bare `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD` forms read as UTC.
fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    let text = raw.as_str()?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&parsed));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0)?));
    }
    None
}

fn coerce_value(raw: &Value) -> f64 {
    let value = raw.as_f64().unwrap_or(0.0);
    if value < 0.0 {
        warn!("clamping negative usage value {} to 0", value);
        return 0.0;
    }
    value
}
