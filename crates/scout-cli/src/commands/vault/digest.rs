use scout_config::VaultConfig;
use scout_core::responses::VaultDigestResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    secret: &str,
    salt: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let salt = salt.unwrap_or(&ctx.config.vault.salt);
    let secret_digest = VaultConfig::digest(salt, secret)?;
    output(
        &VaultDigestResponse {
            salt: salt.to_string(),
            secret_digest,
        },
        flags.format,
    )
}
