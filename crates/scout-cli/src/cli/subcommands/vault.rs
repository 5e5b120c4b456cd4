use clap::Subcommand;

/// Audit history vault.
#[derive(Clone, Debug, Subcommand)]
pub enum VaultCommands {
    /// List every recorded audit, newest first.
    List {
        /// Vault secret; checked against vault.secret_digest.
        #[arg(long, env = "SCOUT_VAULT_SECRET", hide_env_values = true)]
        secret: Option<String>,
    },
    /// Print the digest to store as vault.secret_digest for a secret.
    Digest {
        /// Secret to digest.
        secret: String,
        /// Salt to key the digest with (defaults to vault.salt).
        #[arg(long)]
        salt: Option<String>,
    },
}
