//! The per-resource fallback decision.

use serde::Serialize;

/// Where a page's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Remote,
    Placeholder,
}

/// Records for one resource, tagged with their origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loaded<T> {
    pub source: DataSource,
    pub records: Vec<T>,
}

impl<T> Loaded<T> {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.source, DataSource::Placeholder)
    }
}

/// Choose between remote records and the placeholder dataset.
///
/// Collection fetches arrive here already absorbed: a failed fetch is an empty
/// list. Empty means placeholders, anything else is shown exactly as received.
/// Remote and placeholder records are never mixed.
pub fn settle<T>(resource: &str, remote: Vec<T>, placeholder: impl FnOnce() -> Vec<T>) -> Loaded<T> {
    if remote.is_empty() {
        tracing::debug!(resource, "no remote records; showing placeholder data");
        Loaded {
            source: DataSource::Placeholder,
            records: placeholder(),
        }
    } else {
        Loaded {
            source: DataSource::Remote,
            records: remote,
        }
    }
}
