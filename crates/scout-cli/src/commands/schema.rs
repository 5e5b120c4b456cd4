use scout_core::responses::{AuditReport, VaultListResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `scout schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::AuditReport => schemars::schema_for!(AuditReport),
        SchemaType::VaultList => schemars::schema_for!(VaultListResponse),
    };
    output(&schema, flags.format)
}
