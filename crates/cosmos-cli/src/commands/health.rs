use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{key_values, output};

#[derive(Serialize)]
struct HealthResponse {
    base_url: String,
    status: String,
    caller: String,
}

/// Handle `cosmos health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let health = ctx
        .api
        .health()
        .await
        .with_context(|| format!("backend at {} is not reachable", ctx.api.base_url()))?;

    if !health.is_ok() {
        anyhow::bail!("backend reported status '{}'", health.status);
    }

    let response = HealthResponse {
        base_url: ctx.api.base_url().to_string(),
        status: health.status,
        caller: ctx.api.caller_email(),
    };
    output(&response, flags.format, |_| {
        key_values(&[
            ("backend", response.base_url.clone()),
            ("status", response.status.clone()),
            ("caller", response.caller.clone()),
        ])
    })
}
