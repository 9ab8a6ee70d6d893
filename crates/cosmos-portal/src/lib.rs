//! # cosmos-portal
//!
//! Page loaders for Cosmos Class.
//!
//! Each loader fetches through a [`PortalApi`](cosmos_client::PortalApi),
//! applies the placeholder fallback per resource (see [`loaded::settle`]), and
//! returns a serializable page model. Loaders never fail: an unreachable
//! backend produces a page built from [`placeholder`] data.

pub mod assignments;
pub mod calendar;
pub mod curriculum;
pub mod dashboard;
pub mod loaded;
pub mod login;
pub mod placeholder;
pub mod profile;

pub use assignments::{AssignmentsPage, load_assignments};
pub use calendar::{CalendarPage, default_selected_date, load_calendar};
pub use curriculum::{CurriculumPage, load_curriculum};
pub use dashboard::{Dashboard, load_dashboard};
pub use loaded::{DataSource, Loaded, settle};
pub use login::{LoginOutcome, logout, request_magic_link, verify_magic_code};
pub use profile::{Profile, load_profile};

use cosmos_core::entities::AssignmentSubmission;

/// Log submissions whose grade presence disagrees with their status.
/// They are still shown.
fn warn_inconsistent_grades(submissions: &[AssignmentSubmission]) {
    for submission in submissions {
        if let Err(error) = submission.check_grade_consistency() {
            tracing::warn!(%error, "inconsistent submission from backend");
        }
    }
}
