use anyhow::Context;
use cosmos_config::PortalConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered configuration, and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PortalConfig> {
    let mut config =
        PortalConfig::load_with_dotenv().context("failed to load cosmos configuration")?;

    if let Some(api_url) = &flags.api_url {
        config.api.base_url.clone_from(api_url);
        config
            .api
            .validate()
            .context("invalid --api-url")?;
    }

    tracing::debug!(base_url = config.api.base_url(), "configuration loaded");
    Ok(config)
}
