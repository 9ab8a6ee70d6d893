//! Dashboard: greeting, headline figures, upcoming events, recent assignments.

use cosmos_client::PortalApi;
use cosmos_config::{ProfileConfig, SessionConfig};
use cosmos_core::entities::{AssignmentSubmission, Event};
use cosmos_core::enums::SubmissionStatus;
use serde::Serialize;

use crate::loaded::{DataSource, settle};
use crate::{placeholder, warn_inconsistent_grades};

/// Cards shown per dashboard section.
pub const DASHBOARD_LIMIT: usize = 3;

/// One row of the "Recent Assignments" table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentCard {
    pub id: i64,
    pub title: String,
    pub course: String,
    pub status: SubmissionStatus,
    pub badge: &'static str,
}

impl From<&AssignmentSubmission> for AssignmentCard {
    fn from(submission: &AssignmentSubmission) -> Self {
        Self {
            id: submission.id,
            title: submission.assignment.title.clone(),
            course: submission.assignment.description.clone(),
            status: submission.status,
            badge: submission.status.badge(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub greeting_name: String,
    /// Assignments still pending.
    pub assignments_due: usize,
    /// Share of assignments submitted or graded, rounded to a whole percent.
    pub completion_percent: usize,
    pub upcoming_events: Vec<Event>,
    pub recent_assignments: Vec<AssignmentCard>,
    pub events_source: DataSource,
    pub assignments_source: DataSource,
}

/// Load the dashboard for the session's student and cohort.
///
/// Events and assignments are fetched concurrently and fall back to
/// placeholders independently of each other.
pub async fn load_dashboard<A: PortalApi>(
    api: &A,
    session: &SessionConfig,
    profile: &ProfileConfig,
) -> Dashboard {
    let (events, assignments) = tokio::join!(
        api.cohort_events(session.cohort_id),
        api.student_assignments(session.user_id),
    );

    let events = settle("events", events, placeholder::dashboard_events);
    let assignments = settle("assignments", assignments, placeholder::dashboard_assignments);
    if !assignments.is_placeholder() {
        warn_inconsistent_grades(&assignments.records);
    }

    let submissions = &assignments.records;
    let assignments_due = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Pending)
        .count();

    Dashboard {
        greeting_name: profile.first_name().to_string(),
        assignments_due,
        completion_percent: completion_percent(submissions),
        upcoming_events: events.records.into_iter().take(DASHBOARD_LIMIT).collect(),
        recent_assignments: submissions
            .iter()
            .take(DASHBOARD_LIMIT)
            .map(AssignmentCard::from)
            .collect(),
        events_source: events.source,
        assignments_source: assignments.source,
    }
}

fn completion_percent(submissions: &[AssignmentSubmission]) -> usize {
    let total = submissions.len();
    if total == 0 {
        return 0;
    }
    let done = submissions
        .iter()
        .filter(|s| s.status != SubmissionStatus::Pending)
        .count();
    (done * 100 + total / 2) / total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_rounds_to_nearest_percent() {
        let mut submissions = placeholder::dashboard_assignments();
        // pending, graded, submitted
        assert_eq!(completion_percent(&submissions), 67);

        submissions.truncate(1);
        assert_eq!(completion_percent(&submissions), 0);
        assert_eq!(completion_percent(&[]), 0);
    }

    #[test]
    fn card_carries_dashboard_badge() {
        let card = AssignmentCard::from(&placeholder::dashboard_assignments()[0]);
        assert_eq!(card.badge, "To Do");
        assert_eq!(card.course, "Web Development Track");
    }
}
