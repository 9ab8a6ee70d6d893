use cosmos_portal::{LoginOutcome, logout, request_magic_link, verify_magic_code};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{LoginArgs, VerifyArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cosmos login <email>`.
pub async fn handle_login(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = request_magic_link(&ctx.api, ctx.store.as_ref(), &args.email).await;
    report(&outcome, flags)
}

/// Handle `cosmos verify <email> <code>`.
pub async fn handle_verify(args: &VerifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = verify_magic_code(&ctx.api, ctx.store.as_ref(), &args.email, &args.code).await;
    report(&outcome, flags)
}

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
    note: Option<String>,
}

/// Handle `cosmos logout`.
pub fn handle_logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match &ctx.store {
        Some(store) => {
            logout(store)?;
            LogoutResponse {
                logged_out: true,
                note: ctx
                    .config
                    .identity
                    .email_override()
                    .map(|email| format!("configured identity {email} is still in effect")),
            }
        }
        None => LogoutResponse {
            logged_out: false,
            note: Some("no identity store configured".into()),
        },
    };

    output(&response, flags.format, |_| match &response.note {
        Some(note) if response.logged_out => format!("Logged out ({note})."),
        Some(note) => format!("Nothing to do: {note}."),
        None => String::from("Logged out."),
    })
}

/// Print a successful outcome; a failed one becomes the command error.
fn report(outcome: &LoginOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !outcome.success {
        anyhow::bail!("{}", outcome.message);
    }
    output(outcome, flags.format, |_| outcome.message.clone())
}
