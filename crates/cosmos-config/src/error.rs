//! Errors raised while assembling [`crate::PortalConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `COSMOS_*` variable could not be read into the
    /// portal settings.
    #[error("cannot read cosmos settings: {0}")]
    Figment(#[from] figment::Error),

    /// `api.base_url` is not an address the HTTP client can call.
    #[error("api.base_url '{url}' must start with http:// or https://")]
    InvalidBaseUrl { url: String },
}
