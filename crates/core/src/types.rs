use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Offset-less forms accepted for incoming timestamps. They are read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an incoming timestamp.
///
/// RFC 3339 with an offset is converted to UTC. `YYYY-MM-DD HH:MM:SS` and
/// `YYYY-MM-DDTHH:MM:SS` without an offset are taken to be UTC already.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` helper for optional timestamp fields in request DTOs.
///
/// `null` and an absent field (with `#[serde(default)]`) give `None`; any
/// string that [`parse_timestamp`] rejects is a deserialization error.
pub fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid timestamp '{raw}', expected RFC 3339 or YYYY-MM-DD HH:MM:SS"
            ))
        }),
    }
}
