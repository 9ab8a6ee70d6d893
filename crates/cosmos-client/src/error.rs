//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the portal backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: the request never completed, or the body could not
    /// be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// A request body could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A header could not be encoded (e.g. a non-ASCII identity email).
    #[error("invalid value for header '{name}'")]
    InvalidHeader {
        /// Header name.
        name: String,
    },
}

impl ClientError {
    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::Json(_) | Self::InvalidHeader { .. } => None,
        }
    }
}

/// Errors raised by the persisted identity store.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity store error: {0}")]
    Store(String),

    #[error("email must not be empty")]
    EmptyEmail,
}
