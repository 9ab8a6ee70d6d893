//! Caller identity configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const IDENTITY_FILE_NAME: &str = "identity";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Fixed email to send as the caller identity. Wins over the stored login.
    #[serde(default)]
    pub email: String,

    /// Where the email remembered by `cosmos login` lives.
    /// Defaults to `~/.cosmos/identity`.
    #[serde(default)]
    pub store_path: String,
}

impl IdentityConfig {
    /// Configured override email, if any.
    #[must_use]
    pub fn email_override(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }

    /// Resolved identity store path. `None` when no home directory exists.
    #[must_use]
    pub fn store_path(&self) -> Option<PathBuf> {
        if self.store_path.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(".cosmos").join(IDENTITY_FILE_NAME))
        } else {
            Some(PathBuf::from(self.store_path.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_no_override() {
        let config = IdentityConfig {
            email: "  ".into(),
            ..Default::default()
        };
        assert!(config.email_override().is_none());
    }

    #[test]
    fn explicit_store_path_wins() {
        let config = IdentityConfig {
            store_path: "/tmp/cosmos-identity".into(),
            ..Default::default()
        };
        assert_eq!(config.store_path(), Some(PathBuf::from("/tmp/cosmos-identity")));
    }

    #[test]
    fn default_store_path_is_under_home() {
        if let Some(path) = IdentityConfig::default().store_path() {
            assert!(path.ends_with(".cosmos/identity"));
        }
    }
}
