use std::sync::Arc;

use anyhow::Context;
use cosmos_client::{ApiClient, FileIdentityStore, LayeredIdentity};
use cosmos_config::PortalConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PortalConfig,
    pub api: ApiClient,
    pub identity: Arc<LayeredIdentity>,
    /// `None` when there is no home directory and no configured store path.
    pub store: Option<FileIdentityStore>,
}

impl AppContext {
    pub fn init(config: PortalConfig) -> anyhow::Result<Self> {
        let store = config.identity.store_path().map(FileIdentityStore::new);
        if store.is_none() {
            tracing::warn!("no identity store location; logins will not be remembered");
        }

        let identity = Arc::new(LayeredIdentity::new(
            config.identity.email_override().map(str::to_string),
            store.clone(),
        ));

        let api = ApiClient::new(config.api.base_url(), identity.clone(), config.api.timeout())
            .context("failed to build HTTP client")?;

        Ok(Self {
            config,
            api,
            identity,
            store,
        })
    }
}
