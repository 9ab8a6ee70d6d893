//! Request and response bodies of the magic-link auth endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/request_code`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthCodeRequest {
    pub email: String,
}

/// Response of `POST /auth/request_code`. `code` is only echoed by test backends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthCodeResponse {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Body of `POST /auth/verify_code`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

/// Response of `POST /auth/verify_code`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifyCodeResponse {
    pub message: String,
    pub email: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
