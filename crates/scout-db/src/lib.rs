//! # scout-db
//!
//! libSQL-backed audit history for scout.
//!
//! A single append-only table, `audit_history`, records one row per
//! successful audit. Rows are never updated or deleted, and the schema is
//! only ever extended through versioned migrations (see `migrations`).

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

pub use migrations::SCHEMA_VERSION;

use error::DatabaseError;
use libsql::Builder;

/// How long a writer waits for another process's lock before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Database handle for the audit history.
pub struct ScoutDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ScoutDb {
    /// Open (or create) a local database at `path` and migrate it.
    ///
    /// `":memory:"` gives a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, a migration
    /// fails, or the stored schema is incompatible with this build.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let scout_db = Self::connect_unmigrated(path).await?;
        scout_db.run_migrations().await?;
        Ok(scout_db)
    }

    async fn connect_unmigrated(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // PRAGMA busy_timeout answers with a row, so it goes through query().
        let pragma = |e: libsql::Error| DatabaseError::Migration(format!("PRAGMA busy_timeout: {e}"));
        let mut rows = conn
            .query(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"), ())
            .await
            .map_err(pragma)?;
        rows.next().await.map_err(pragma)?;

        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
