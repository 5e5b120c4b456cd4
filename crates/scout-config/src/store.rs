//! History store configuration.

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    ".scout/history.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL history database, relative to the working directory.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_db_path_is_project_local() {
        assert_eq!(StoreConfig::default().db_path, ".scout/history.db");
    }
}
