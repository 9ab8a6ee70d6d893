use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Curriculum(args) => commands::curriculum::handle(&args, ctx, flags).await,
        Commands::Assignments(args) => commands::assignments::handle(&args, ctx, flags).await,
        Commands::Calendar(args) => commands::calendar::handle(&args, ctx, flags).await,
        Commands::Profile => commands::profile::handle(ctx, flags),
        Commands::Login(args) => commands::auth::handle_login(&args, ctx, flags).await,
        Commands::Verify(args) => commands::auth::handle_verify(&args, ctx, flags).await,
        Commands::Logout => commands::auth::handle_logout(ctx, flags),
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
