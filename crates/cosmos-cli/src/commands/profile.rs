use cosmos_portal::load_profile;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{key_values, output};

/// Handle `cosmos profile`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = load_profile(ctx.identity.as_ref(), &ctx.config.profile);
    output(&profile, flags.format, |_| {
        key_values(&[
            ("name", profile.display_name.clone()),
            ("email", profile.email.clone()),
            ("initials", profile.initials.clone()),
            ("identity", ctx.identity.source().to_string()),
        ])
    })
}
