//! Magic-link login actions.
//!
//! Each action returns a user-facing [`LoginOutcome`] instead of an error; the
//! underlying failure is logged.

use cosmos_client::{FileIdentityStore, IdentityError, PortalApi};
use serde::Serialize;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const SEND_FAILED: &str = "Failed to send magic link. Please try again.";
pub const CODE_REQUIRED: &str = "Email and code are required.";
pub const CODE_REJECTED: &str = "Invalid or expired code.";
pub const VERIFY_FAILED: &str = "Failed to verify code. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: String,
}

impl LoginOutcome {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Ask the backend to send a magic code to `email`.
///
/// On success the email is remembered in `store`, so later requests carry it.
pub async fn request_magic_link<A: PortalApi>(
    api: &A,
    store: Option<&FileIdentityStore>,
    email: &str,
) -> LoginOutcome {
    let email = email.trim();
    if email.is_empty() {
        return LoginOutcome::failed(EMAIL_REQUIRED);
    }

    match api.request_auth_code(email).await {
        Ok(response) => {
            remember(store, email);
            match response.code {
                Some(code) => {
                    LoginOutcome::ok(format!("Magic code sent! For testing, your code is: {code}"))
                }
                None => LoginOutcome::ok(response.message),
            }
        }
        Err(error) => {
            tracing::error!(%error, "magic link request failed");
            LoginOutcome::failed(SEND_FAILED)
        }
    }
}

/// Exchange the emailed code for a login.
pub async fn verify_magic_code<A: PortalApi>(
    api: &A,
    store: Option<&FileIdentityStore>,
    email: &str,
    code: &str,
) -> LoginOutcome {
    let (email, code) = (email.trim(), code.trim());
    if email.is_empty() || code.is_empty() {
        return LoginOutcome::failed(CODE_REQUIRED);
    }

    match api.verify_auth_code(email, code).await {
        Ok(response) => {
            let confirmed = if response.email.trim().is_empty() {
                email
            } else {
                response.email.trim()
            };
            remember(store, confirmed);
            LoginOutcome::ok(response.message)
        }
        Err(error) if error.status() == Some(401) => {
            tracing::warn!(%error, "magic code rejected");
            LoginOutcome::failed(CODE_REJECTED)
        }
        Err(error) => {
            tracing::error!(%error, "magic code verification failed");
            LoginOutcome::failed(VERIFY_FAILED)
        }
    }
}

/// Forget the remembered email.
///
/// # Errors
///
/// Returns [`IdentityError::Store`] if the stored identity cannot be removed.
pub fn logout(store: &FileIdentityStore) -> Result<(), IdentityError> {
    store.clear()?;
    tracing::info!(path = %store.path().display(), "identity cleared");
    Ok(())
}

fn remember(store: Option<&FileIdentityStore>, email: &str) {
    let Some(store) = store else {
        return;
    };
    if let Err(error) = store.store(email) {
        tracing::warn!(%error, "could not remember login email");
    }
}
