//! Datetime serialization helpers for wire types.
//!
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp -> `DateTime<Utc>`
//!
//! The backend normally emits RFC3339, but older message rows carry Unix
//! timestamps, so deserialization accepts both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
///
/// Unix timestamps are auto-detected as seconds or milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
        U64(u64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        TimestampOrString::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
        TimestampOrString::U64(ts) => i64::try_from(ts)
            .ok()
            .and_then(parse_unix_timestamp)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
    }
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn rfc3339_string() {
        let w: Wrapper = serde_json::from_str(r#"{"at":"2021-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(w.at.timestamp(), 1_609_459_200);
    }

    #[test]
    fn unix_seconds() {
        let w: Wrapper = serde_json::from_str(r#"{"at":1609459200}"#).unwrap();
        assert_eq!(w.at.timestamp(), 1_609_459_200);
    }

    #[test]
    fn unix_milliseconds() {
        let w: Wrapper = serde_json::from_str(r#"{"at":1609459200000}"#).unwrap();
        assert_eq!(w.at.timestamp(), 1_609_459_200);
    }

    #[test]
    fn rejects_garbage() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"at":"next tuesday"}"#);
        assert!(result.is_err());
    }
}
