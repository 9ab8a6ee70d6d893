use cosmos_core::entities::AssignmentSubmission;

use crate::ApiClient;
use crate::operation::STUDENT_ASSIGNMENTS;

impl ApiClient {
    /// Submissions (with embedded assignment and grade) for one student.
    /// Empty on any failure.
    pub async fn student_assignments(&self, user_id: i64) -> Vec<AssignmentSubmission> {
        self.call(STUDENT_ASSIGNMENTS, Some(user_id), None)
            .await
            .unwrap_or_default()
    }
}
