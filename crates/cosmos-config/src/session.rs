//! Session-scoped ids and profile defaults.
//!
//! There is no session mechanism; the student and cohort a page loads data
//! for are plain configuration values.

use serde::{Deserialize, Serialize};

const fn default_id() -> i64 {
    1
}

fn default_display_name() -> String {
    String::from("Alex Vercel")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Student whose assignments are loaded.
    #[serde(default = "default_id")]
    pub user_id: i64,

    /// Cohort whose events are loaded.
    #[serde(default = "default_id")]
    pub cohort_id: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_id(),
            cohort_id: default_id(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Name shown on the dashboard greeting and profile page.
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
        }
    }
}

impl ProfileConfig {
    /// First name, used by the dashboard greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or("there")
    }

    /// Uppercase initials of the first two name parts (avatar fallback).
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
