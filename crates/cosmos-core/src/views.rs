//! Pure derivations over loaded records.
//!
//! Nothing here performs I/O. Page loaders in `cosmos-portal` feed these with
//! either remote or placeholder records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::{AssignmentSubmission, Event};
use crate::enums::{AssignmentTab, SubmissionStatus};

/// Bucket events by the UTC calendar date of their start time.
///
/// Within each date the input order is preserved. Dates iterate ascending.
#[must_use]
pub fn events_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        buckets
            .entry(event.start_time.date_naive())
            .or_default()
            .push(event.clone());
    }
    buckets
}

/// Submissions split into the assignment tracker's tabs.
///
/// Filtering is non-destructive: `all` keeps the original sequence and each
/// status view keeps the original relative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusPartition {
    pub all: Vec<AssignmentSubmission>,
    pub pending: Vec<AssignmentSubmission>,
    pub submitted: Vec<AssignmentSubmission>,
    pub graded: Vec<AssignmentSubmission>,
}

impl StatusPartition {
    #[must_use]
    pub fn from_submissions(submissions: &[AssignmentSubmission]) -> Self {
        let with_status = |status: SubmissionStatus| {
            submissions
                .iter()
                .filter(|submission| submission.status == status)
                .cloned()
                .collect::<Vec<_>>()
        };

        Self {
            all: submissions.to_vec(),
            pending: with_status(SubmissionStatus::Pending),
            submitted: with_status(SubmissionStatus::Submitted),
            graded: with_status(SubmissionStatus::Graded),
        }
    }

    /// Submissions shown under `tab`.
    #[must_use]
    pub fn tab(&self, tab: AssignmentTab) -> &[AssignmentSubmission] {
        match tab {
            AssignmentTab::All => &self.all,
            AssignmentTab::Todo => &self.pending,
            AssignmentTab::Submitted => &self.submitted,
            AssignmentTab::Graded => &self.graded,
        }
    }
}

/// Human-readable grade cell for a submission.
///
/// - graded with a grade: `"{score}/{max_score} ({pct}%)"`, percentage rounded
///   to a whole number
/// - submitted: `"Pending"`
/// - anything else (including graded without a grade): `"N/A"`
///
/// A non-positive `max_score` has no meaningful percentage, so only
/// `"{score}/{max_score}"` is shown.
#[must_use]
pub fn grade_display(submission: &AssignmentSubmission) -> String {
    match (submission.status, &submission.grade) {
        (SubmissionStatus::Graded, Some(grade)) => {
            let max_score = submission.assignment.max_score;
            if max_score > 0.0 {
                let percentage = (grade.score / max_score * 100.0).round();
                format!("{}/{} ({percentage}%)", grade.score, max_score)
            } else {
                format!("{}/{}", grade.score, max_score)
            }
        }
        (SubmissionStatus::Submitted, _) => String::from("Pending"),
        _ => String::from("N/A"),
    }
}
