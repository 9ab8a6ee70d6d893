//! The seam between page loaders and the backend.
//!
//! Page loaders are generic over [`PortalApi`] so they can be driven by a
//! stub in tests. [`ApiClient`] is the only production implementation.

use std::future::Future;

use cosmos_core::entities::{
    AssignmentSubmission, AuthCodeResponse, Curriculum, Event, HealthStatus, Lesson,
    VerifyCodeResponse,
};

use crate::{ApiClient, error::ClientError};

/// Typed backend operations, with the failure policy already applied:
/// collection methods cannot fail, single-resource methods can.
pub trait PortalApi: Send + Sync {
    fn list_curricula(&self) -> impl Future<Output = Vec<Curriculum>> + Send;

    fn list_lessons(&self) -> impl Future<Output = Vec<Lesson>> + Send;

    fn student_assignments(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Vec<AssignmentSubmission>> + Send;

    fn cohort_events(&self, cohort_id: i64) -> impl Future<Output = Vec<Event>> + Send;

    fn request_auth_code(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<AuthCodeResponse, ClientError>> + Send;

    fn verify_auth_code(
        &self,
        email: &str,
        code: &str,
    ) -> impl Future<Output = Result<VerifyCodeResponse, ClientError>> + Send;

    fn health(&self) -> impl Future<Output = Result<HealthStatus, ClientError>> + Send;
}

impl PortalApi for ApiClient {
    async fn list_curricula(&self) -> Vec<Curriculum> {
        Self::list_curricula(self).await
    }

    async fn list_lessons(&self) -> Vec<Lesson> {
        Self::list_lessons(self).await
    }

    async fn student_assignments(&self, user_id: i64) -> Vec<AssignmentSubmission> {
        Self::student_assignments(self, user_id).await
    }

    async fn cohort_events(&self, cohort_id: i64) -> Vec<Event> {
        Self::cohort_events(self, cohort_id).await
    }

    async fn request_auth_code(&self, email: &str) -> Result<AuthCodeResponse, ClientError> {
        Self::request_auth_code(self, email).await
    }

    async fn verify_auth_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, ClientError> {
        Self::verify_auth_code(self, email, code).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        Self::health(self).await
    }
}
