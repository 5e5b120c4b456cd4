use std::path::Path;

use anyhow::Context;
use scout_config::ScoutConfig;

use crate::cli::GlobalFlags;

/// Load the layered config, then apply CLI overrides.
///
/// Expects [`load_dotenv`] to have run already.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ScoutConfig> {
    let mut config = ScoutConfig::load().context("failed to load scout configuration")?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut ScoutConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.store.db_path.clone_from(db);
    }
}

/// Load `.env` from the working directory into the process environment.
///
/// Runs before argument parsing so clap `env` fallbacks such as
/// `SCOUT_VAULT_SECRET` see values from the file. Variables already set in
/// the environment win.
pub fn load_dotenv() -> anyhow::Result<()> {
    load_dotenv_from(Path::new(".env"))
}

fn load_dotenv_from(env_path: &Path) -> anyhow::Result<()> {
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: db.map(str::to_string),
        }
    }

    #[test]
    fn db_flag_overrides_store_path() {
        let mut config = ScoutConfig::default();
        apply_overrides(&mut config, &flags(Some("/tmp/other.db")));
        assert_eq!(config.store.db_path, "/tmp/other.db");
    }

    #[test]
    fn no_db_flag_keeps_configured_path() {
        let mut config = ScoutConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.store.db_path, ".scout/history.db");
    }

    #[test]
    fn dotenv_secret_reaches_vault_list() {
        use clap::Parser;

        use crate::cli::subcommands::VaultCommands;
        use crate::cli::{Cli, Commands};

        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "SCOUT_VAULT_SECRET=from-dotenv\n").unwrap();

        load_dotenv_from(&env_path).unwrap();
        let cli = Cli::try_parse_from(["scout", "vault", "list"]).unwrap();

        let Commands::Vault {
            action: VaultCommands::List { secret },
        } = cli.command
        else {
            panic!("expected vault list");
        };
        assert_eq!(secret.as_deref(), Some("from-dotenv"));
    }

    #[test]
    fn missing_dotenv_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv_from(&dir.path().join(".env")).is_ok());
    }
}
