//! Curriculum and lesson listings.

use cosmos_core::entities::{Curriculum, Lesson};

use crate::ApiClient;
use crate::operation::{LIST_CURRICULA, LIST_LESSONS};

impl ApiClient {
    /// All curricula visible to the caller. Empty on any failure.
    pub async fn list_curricula(&self) -> Vec<Curriculum> {
        self.call(LIST_CURRICULA, None, None)
            .await
            .unwrap_or_default()
    }

    /// Every lesson across curricula. Empty on any failure.
    pub async fn list_lessons(&self) -> Vec<Lesson> {
        self.call(LIST_LESSONS, None, None).await.unwrap_or_default()
    }
}
