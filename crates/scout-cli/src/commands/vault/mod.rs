mod digest;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VaultCommands;
use crate::context::AppContext;

/// Handle `scout vault`.
pub async fn handle(
    action: &VaultCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VaultCommands::List { secret } => list::run(secret.as_deref(), ctx, flags).await,
        VaultCommands::Digest { secret, salt } => digest::run(secret, salt.as_deref(), ctx, flags),
    }
}
