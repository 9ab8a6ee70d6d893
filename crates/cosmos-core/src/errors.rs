//! Cross-cutting error types for Cosmos.
//!
//! Transport errors live in `cosmos-client`, configuration errors in
//! `cosmos-config`. A unified error is deferred to `cosmos-cli` where all
//! crate errors converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Cosmos crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record failed a data-model invariant check.
    #[error("Validation error: {0}")]
    Validation(String),
}
