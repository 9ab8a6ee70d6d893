//! Serde helpers for the timestamp formats the portal backend emits.
//!
//! The backend is not consistent about offsets: some fields arrive as RFC 3339
//! with `Z`, some as naive ISO datetimes, and hand-authored records use bare
//! dates. All of them are read as UTC. Serialization always writes RFC 3339.
//!
//! # Example
//! ```ignore
//! use cosmos_core::timestamp;
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "timestamp::utc")]
//!     pub start_time: DateTime<Utc>,
//! }
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp into UTC.
///
/// Accepts, in order: RFC 3339 with offset, naive datetime (`T` or space
/// separated, optional fraction), and bare `YYYY-MM-DD` (midnight UTC).
#[must_use]
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Format a timestamp the way the serializers write it.
#[must_use]
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `DateTime<Utc>` field adapter.
pub mod utc {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}
