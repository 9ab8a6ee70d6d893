use cosmos_core::entities::Event;

use crate::ApiClient;
use crate::operation::COHORT_EVENTS;

impl ApiClient {
    /// Calendar events for a cohort. Empty on any failure.
    pub async fn cohort_events(&self, cohort_id: i64) -> Vec<Event> {
        self.call(COHORT_EVENTS, Some(cohort_id), None)
            .await
            .unwrap_or_default()
    }
}
