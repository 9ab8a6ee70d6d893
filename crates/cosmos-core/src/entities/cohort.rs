use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::timestamp;

/// A portal account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

/// A group of students progressing through curricula together.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Cohort {
    pub id: i64,
    pub name: String,
    #[serde(with = "timestamp::utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp::utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub end_date: DateTime<Utc>,
}
