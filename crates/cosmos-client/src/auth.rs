//! Magic-link auth and health endpoints.
//!
//! These are single-resource operations: failures reach the caller.

use cosmos_core::entities::{
    AuthCodeRequest, AuthCodeResponse, HealthStatus, VerifyCodeRequest, VerifyCodeResponse,
};
use crate::operation::{HEALTH, REQUEST_AUTH_CODE, VERIFY_AUTH_CODE};
use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// Ask the backend to issue a magic-link code for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn request_auth_code(&self, email: &str) -> Result<AuthCodeResponse, ClientError> {
        let body = serde_json::to_value(AuthCodeRequest {
            email: email.to_string(),
        })?;
        self.call(REQUEST_AUTH_CODE, None, Some(body)).await
    }

    /// Exchange a magic-link code for a login confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 401 for a wrong code, and
    /// [`ClientError`] for any other failure.
    pub async fn verify_auth_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, ClientError> {
        let body = serde_json::to_value(VerifyCodeRequest {
            email: email.to_string(),
            code: code.to_string(),
        })?;
        self.call(VERIFY_AUTH_CODE, None, Some(body)).await
    }

    /// Backend liveness probe.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.call(HEALTH, None, None).await
    }
}
