//! Status and type enums for Cosmos.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the backend's wire values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SubmissionStatus
// ---------------------------------------------------------------------------

/// Status of an assignment submission.
///
/// ```text
/// pending → submitted → graded
/// ```
///
/// Transitions happen server-side only; the client reads snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Submitted,
    Graded,
}

impl SubmissionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Submitted],
            Self::Submitted => &[Self::Graded],
            Self::Graded => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Graded => "graded",
        }
    }

    /// Capitalised label shown in the assignment table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Submitted => "Submitted",
            Self::Graded => "Graded",
        }
    }

    /// Badge text shown on the dashboard.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Pending => "To Do",
            Self::Submitted => "Submitted",
            Self::Graded => "Graded",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Kind of a cohort calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Class,
    Deadline,
    Meeting,
}

impl EventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Deadline => "deadline",
            Self::Meeting => "meeting",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Live Class",
            Self::Deadline => "Deadline",
            Self::Meeting => "Meeting",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Portal role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssignmentTab
// ---------------------------------------------------------------------------

/// Tabs of the assignment tracker. `Todo` shows pending submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentTab {
    #[default]
    All,
    Todo,
    Submitted,
    Graded,
}

impl AssignmentTab {
    /// The submission status a tab filters on. `None` for the unfiltered tab.
    #[must_use]
    pub const fn status(self) -> Option<SubmissionStatus> {
        match self {
            Self::All => None,
            Self::Todo => Some(SubmissionStatus::Pending),
            Self::Submitted => Some(SubmissionStatus::Submitted),
            Self::Graded => Some(SubmissionStatus::Graded),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Todo => "todo",
            Self::Submitted => "submitted",
            Self::Graded => "graded",
        }
    }
}

impl fmt::Display for AssignmentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
