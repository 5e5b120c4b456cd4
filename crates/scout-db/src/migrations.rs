//! Versioned, additive schema migrations.
//!
//! The whole upgrade runs in one `BEGIN IMMEDIATE` transaction: the stored
//! version is read under the writer lock, so processes opening the same
//! fresh file queue up and only the first one applies anything. Migrations
//! only ever create tables or add columns; a database that cannot be brought
//! forward that way is refused, never rewritten.

use libsql::{Connection, TransactionBehavior};

use crate::ScoutDb;
use crate::error::DatabaseError;

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "001_audit_history",
        sql: include_str!("../migrations/001_audit_history.sql"),
    },
    Migration {
        version: 2,
        name: "002_history_names",
        sql: include_str!("../migrations/002_history_names.sql"),
    },
];

/// Newest schema version this build understands.
pub const SCHEMA_VERSION: i64 = 2;

/// Columns every `audit_history` table must have to be adopted.
const V1_COLUMNS: &[&str] = &["id", "target_identifier", "my_identifier", "created_at"];

/// Columns added by version 2.
const V2_COLUMNS: &[&str] = &["target_name", "my_name"];

impl ScoutDb {
    /// Bring the schema up to [`SCHEMA_VERSION`].
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await
            .map_err(|e| DatabaseError::Migration(format!("begin: {e}")))?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)",
            (),
        )
        .await
        .map_err(|e| DatabaseError::Migration(format!("schema_version: {e}")))?;

        let current = match stored_version(&tx).await? {
            Some(version) => version,
            None => adopt_unversioned(&tx).await?,
        };

        if current > SCHEMA_VERSION {
            return Err(DatabaseError::IncompatibleSchema(format!(
                "database is at schema version {current}, this build supports up to {SCHEMA_VERSION}"
            )));
        }

        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            apply(&tx, migration).await?;
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::Migration(format!("commit: {e}")))?;
        Ok(())
    }

    /// Highest stamped version, or `None` if nothing was ever stamped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the version table cannot be read.
    pub async fn schema_version(&self) -> Result<Option<i64>, DatabaseError> {
        stored_version(&self.conn).await
    }
}

async fn stored_version(conn: &Connection) -> Result<Option<i64>, DatabaseError> {
    let mut rows = conn
        .query("SELECT MAX(version) FROM schema_version", ())
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<Option<i64>>(0)?)
}

/// Decide the starting version of a database with no stamp.
///
/// A fresh database starts at 0. An existing `audit_history` table with
/// the version 1 columns is stamped 1 (or 2 if the name columns are also
/// there). Anything else is refused.
async fn adopt_unversioned(conn: &Connection) -> Result<i64, DatabaseError> {
    let columns = table_columns(conn, "audit_history").await?;
    if columns.is_empty() {
        return Ok(0);
    }

    let missing: Vec<&str> = V1_COLUMNS
        .iter()
        .copied()
        .filter(|c| !columns.iter().any(|have| have == c))
        .collect();
    if !missing.is_empty() {
        return Err(DatabaseError::IncompatibleSchema(format!(
            "existing audit_history table is missing columns: {}",
            missing.join(", ")
        )));
    }

    let version = if V2_COLUMNS
        .iter()
        .all(|c| columns.iter().any(|have| have == c))
    {
        2
    } else {
        1
    };
    stamp(conn, version).await?;
    tracing::info!(version, "adopted unversioned audit_history table");
    Ok(version)
}

async fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn
        .query(&format!("PRAGMA table_info({table})"), ())
        .await?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next().await? {
        columns.push(row.get::<String>(1)?);
    }
    Ok(columns)
}

async fn stamp(conn: &Connection, version: i64) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .await
    .map_err(|e| DatabaseError::Migration(format!("stamp v{version}: {e}")))?;
    Ok(())
}

/// Run one migration inside the caller's transaction.
async fn apply(conn: &Connection, migration: &Migration) -> Result<(), DatabaseError> {
    let fail = |e: libsql::Error| DatabaseError::Migration(format!("{}: {e}", migration.name));

    conn.execute_batch(migration.sql).await.map_err(fail)?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [migration.version],
    )
    .await
    .map_err(fail)?;

    tracing::debug!(migration = migration.name, "applied migration");
    Ok(())
}
