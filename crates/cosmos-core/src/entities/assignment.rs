use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubmissionStatus;
use crate::errors::CoreError;
use crate::timestamp;

/// A gradeable piece of coursework attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub lesson_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "timestamp::utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub due_date: DateTime<Utc>,
    /// Maximum achievable score. Positive by backend contract.
    pub max_score: f64,
}

/// A grader's verdict on one submission.
///
/// `0 <= score <= assignment.max_score` is expected but not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub submission_id: i64,
    pub grader_id: i64,
    pub score: f64,
    #[serde(default)]
    pub feedback: String,
}

/// A student's submission for an assignment, with the assignment embedded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AssignmentSubmission {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub file_url: String,
    #[serde(with = "timestamp::utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub assignment: Assignment,
    #[serde(default)]
    pub grade: Option<Grade>,
}

impl AssignmentSubmission {
    /// Check the convention that a grade is present iff the status is `graded`.
    ///
    /// The backend owns this invariant; callers log violations rather than
    /// rejecting the record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when grade presence and status disagree.
    pub fn check_grade_consistency(&self) -> Result<(), CoreError> {
        let graded = self.status == SubmissionStatus::Graded;
        match (graded, self.grade.is_some()) {
            (true, false) => Err(CoreError::Validation(format!(
                "submission {} is graded but carries no grade",
                self.id
            ))),
            (false, true) => Err(CoreError::Validation(format!(
                "submission {} is {} but carries a grade",
                self.id, self.status
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const FIXTURE: &str = r#"{
        "id": 2,
        "assignment_id": 2,
        "user_id": 1,
        "file_url": "",
        "submitted_at": "2025-07-04T10:30:00",
        "status": "graded",
        "assignment": {
            "id": 2,
            "lesson_id": 2,
            "title": "Robotics Ethics Essay",
            "description": "AI & Robotics",
            "due_date": "2025-07-05",
            "max_score": 100
        },
        "grade": {"id": 1, "submission_id": 2, "grader_id": 1, "score": 92, "feedback": "Good work"}
    }"#;

    #[test]
    fn parses_backend_submission() {
        let submission: AssignmentSubmission = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(submission.status, SubmissionStatus::Graded);
        assert_eq!(
            submission.assignment.due_date,
            Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(submission.grade.as_ref().map(|g| g.score), Some(92.0));
        assert!(submission.check_grade_consistency().is_ok());
    }

    #[test]
    fn null_grade_reads_as_none() {
        let raw = FIXTURE.replace(
            r#"{"id": 1, "submission_id": 2, "grader_id": 1, "score": 92, "feedback": "Good work"}"#,
            "null",
        );
        let submission: AssignmentSubmission = serde_json::from_str(&raw).unwrap();
        assert!(submission.grade.is_none());
        let err = submission.check_grade_consistency().unwrap_err();
        assert!(err.to_string().contains("carries no grade"));
    }

    #[test]
    fn grade_on_ungraded_submission_is_flagged() {
        let mut submission: AssignmentSubmission = serde_json::from_str(FIXTURE).unwrap();
        submission.status = SubmissionStatus::Submitted;
        let err = submission.check_grade_consistency().unwrap_err();
        assert!(err.to_string().contains("submitted but carries a grade"));
    }
}
