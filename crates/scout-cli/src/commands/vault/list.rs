use anyhow::{Context, bail};
use scout_core::entities::HistoryRecord;
use scout_core::responses::VaultListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(secret: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = unlock_and_list(secret, ctx).await?;
    let total = u32::try_from(records.len())?;
    output(&VaultListResponse { records, total }, flags.format)
}

async fn unlock_and_list(
    secret: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<Vec<HistoryRecord>> {
    let Some(secret) = secret else {
        bail!("vault secret required: pass --secret or set SCOUT_VAULT_SECRET");
    };
    let granted = ctx
        .config
        .vault
        .verify(secret)
        .context("vault listing refused")?;
    if !granted {
        tracing::warn!("vault access denied");
        bail!("vault access denied: secret does not match vault.secret_digest");
    }

    let db = ctx.open_history().await?;
    db.list_all().await.context("failed to list audit history")
}
