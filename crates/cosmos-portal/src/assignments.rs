//! Assignment tracker: submissions by tab with formatted grades.

use chrono::NaiveDate;
use cosmos_client::PortalApi;
use cosmos_config::SessionConfig;
use cosmos_core::entities::AssignmentSubmission;
use cosmos_core::enums::{AssignmentTab, SubmissionStatus};
use cosmos_core::views::{StatusPartition, grade_display};
use serde::Serialize;

use crate::loaded::{DataSource, settle};
use crate::{placeholder, warn_inconsistent_grades};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRow {
    pub id: i64,
    pub title: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub status: SubmissionStatus,
    pub status_label: &'static str,
    pub grade: String,
}

impl From<&AssignmentSubmission> for AssignmentRow {
    fn from(submission: &AssignmentSubmission) -> Self {
        Self {
            id: submission.id,
            title: submission.assignment.title.clone(),
            course: submission.assignment.description.clone(),
            due_date: submission.assignment.due_date.date_naive(),
            status: submission.status,
            status_label: submission.status.label(),
            grade: grade_display(submission),
        }
    }
}

/// Number of submissions under each tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub todo: usize,
    pub submitted: usize,
    pub graded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentsPage {
    pub tab: AssignmentTab,
    pub counts: TabCounts,
    pub rows: Vec<AssignmentRow>,
    pub source: DataSource,
}

/// Load the session student's submissions and select `tab`.
pub async fn load_assignments<A: PortalApi>(
    api: &A,
    session: &SessionConfig,
    tab: AssignmentTab,
) -> AssignmentsPage {
    let submissions = settle(
        "assignments",
        api.student_assignments(session.user_id).await,
        placeholder::assignment_submissions,
    );
    if !submissions.is_placeholder() {
        warn_inconsistent_grades(&submissions.records);
    }

    let partition = StatusPartition::from_submissions(&submissions.records);
    AssignmentsPage {
        tab,
        counts: TabCounts {
            all: partition.all.len(),
            todo: partition.pending.len(),
            submitted: partition.submitted.len(),
            graded: partition.graded.len(),
        },
        rows: partition.tab(tab).iter().map(AssignmentRow::from).collect(),
        source: submissions.source,
    }
}
