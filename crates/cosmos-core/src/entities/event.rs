use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventType;
use crate::timestamp;

/// A scheduled cohort event (live class, deadline, or meeting).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub cohort_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_type: EventType,
    #[serde(with = "timestamp::utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp::utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
}
