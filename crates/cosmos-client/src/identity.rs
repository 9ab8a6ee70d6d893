//! Caller identity providers.
//!
//! The backend authorizes requests by the `X-User-Email` header. The client
//! asks its injected [`IdentityProvider`] for that email on every request, so
//! a login performed mid-process is picked up by the next fetch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IdentityError;

/// Email sent when no identity is known.
pub const PLACEHOLDER_EMAIL: &str = "user@example.com";

/// Source of the caller's email.
pub trait IdentityProvider: Send + Sync {
    /// The caller's email, or `None` if unknown.
    fn email(&self) -> Option<String>;
}

/// Resolve the email to send, substituting [`PLACEHOLDER_EMAIL`] for a
/// missing or blank identity.
#[must_use]
pub fn resolve_email(provider: &dyn IdentityProvider) -> String {
    provider
        .email()
        .map(|email| email.trim().to_string())
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string())
}

// ── Static ─────────────────────────────────────────────────────────

/// A fixed identity. `StaticIdentity::anonymous()` always yields `None`.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(Option<String>);

impl StaticIdentity {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self(Some(email.into()))
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn email(&self) -> Option<String> {
        self.0.clone()
    }
}

// ── File store ─────────────────────────────────────────────────────

/// Email remembered on disk between invocations (`~/.cosmos/identity`).
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored email. Missing, unreadable, or blank files yield `None`.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|content| content.trim().to_string())
            .filter(|email| !email.is_empty())
    }

    /// Persist `email`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmptyEmail`] for a blank email and
    /// [`IdentityError::Store`] if the file cannot be written.
    pub fn store(&self, email: &str) -> Result<(), IdentityError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(IdentityError::EmptyEmail);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| IdentityError::Store(format!("mkdir {}: {e}", parent.display())))?;
        }
        fs::write(&self.path, email)
            .map_err(|e| IdentityError::Store(format!("write {}: {e}", self.path.display())))
    }

    /// Forget the stored email. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Store`] if an existing file cannot be removed.
    pub fn clear(&self) -> Result<(), IdentityError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                IdentityError::Store(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

impl IdentityProvider for FileIdentityStore {
    fn email(&self) -> Option<String> {
        self.load()
    }
}

// ── Layered ────────────────────────────────────────────────────────

/// Configured override first, then the on-disk store.
#[derive(Debug, Clone, Default)]
pub struct LayeredIdentity {
    override_email: Option<String>,
    store: Option<FileIdentityStore>,
}

impl LayeredIdentity {
    #[must_use]
    pub fn new(override_email: Option<String>, store: Option<FileIdentityStore>) -> Self {
        Self {
            override_email: override_email.filter(|email| !email.trim().is_empty()),
            store,
        }
    }

    /// Name of the layer the current email comes from (for status display).
    #[must_use]
    pub fn source(&self) -> &'static str {
        if self.override_email.is_some() {
            "config"
        } else if self.store.as_ref().and_then(FileIdentityStore::load).is_some() {
            "store"
        } else {
            "placeholder"
        }
    }
}

impl IdentityProvider for LayeredIdentity {
    fn email(&self) -> Option<String> {
        self.override_email
            .clone()
            .or_else(|| self.store.as_ref().and_then(FileIdentityStore::load))
    }
}
