use clap::{Args, Subcommand};

use crate::cli::subcommands::VaultCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit a target company's site against your own.
    Audit(AuditArgs),
    /// Gated access to the audit history.
    Vault {
        #[command(subcommand)]
        action: VaultCommands,
    },
    /// Print the JSON schema of the audit report.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Target company URL or bare domain (e.g. acme.com).
    pub target: String,
    /// Your company URL or bare domain.
    pub mine: String,
    /// Skip market news headlines.
    #[arg(long)]
    pub no_news: bool,
    /// Do not follow the target's careers link.
    #[arg(long)]
    pub no_careers: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which response to describe.
    #[arg(long = "type", value_enum, default_value = "audit-report")]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum SchemaType {
    AuditReport,
    VaultList,
}
