//! Audit history repository.
//!
//! Append and list only. There is deliberately no update, delete, filter or
//! pagination API.

use chrono::Utc;
use libsql::TransactionBehavior;
use scout_core::entities::{HistoryEntry, HistoryRecord};

use crate::ScoutDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};

impl ScoutDb {
    /// Append one history row and return it as stored.
    ///
    /// The insert runs inside `BEGIN IMMEDIATE`, so concurrent writers from
    /// other processes queue on SQLite's writer lock instead of interleaving.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction or INSERT fails.
    pub async fn append(&self, entry: &HistoryEntry) -> Result<HistoryRecord, DatabaseError> {
        let created_at = Utc::now();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;
        tx.execute(
            "INSERT INTO audit_history (target_identifier, my_identifier, target_name, my_name, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                entry.target_identifier.as_str(),
                entry.my_identifier.as_str(),
                entry.target_name.as_deref(),
                entry.my_name.as_deref(),
                created_at.to_rfc3339()
            ],
        )
        .await?;
        let id = tx.last_insert_rowid();
        tx.commit().await?;

        tracing::debug!(id, target = %entry.target_identifier, "history appended");
        Ok(HistoryRecord {
            id,
            target_identifier: entry.target_identifier.clone(),
            my_identifier: entry.my_identifier.clone(),
            target_name: entry.target_name.clone(),
            my_name: entry.my_name.clone(),
            created_at,
        })
    }

    /// Every history row, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list_all(&self) -> Result<Vec<HistoryRecord>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, target_identifier, my_identifier, target_name, my_name, created_at
                 FROM audit_history ORDER BY id DESC",
                (),
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(HistoryRecord {
                id: row.get::<i64>(0)?,
                target_identifier: row.get::<String>(1)?,
                my_identifier: row.get::<String>(2)?,
                target_name: get_opt_string(&row, 3)?,
                my_name: get_opt_string(&row, 4)?,
                created_at: parse_datetime(&row.get::<String>(5)?)?,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn test_db() -> ScoutDb {
        ScoutDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let db = test_db().await;
        assert!(db.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_returns_stored_record() {
        let db = test_db().await;
        let entry = HistoryEntry::new("https://acme.com", "https://us.io").with_names("Acme", "Us");

        let record = db.append(&entry).await.unwrap();
        assert!(record.id > 0);
        assert_eq!(record.target_name.as_deref(), Some("Acme"));

        let listed = db.list_all().await.unwrap();
        assert_eq!(listed, vec![record]);
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let db = test_db().await;
        for target in ["https://a.com", "https://b.com", "https://c.com"] {
            db.append(&HistoryEntry::new(target, "https://us.io"))
                .await
                .unwrap();
        }

        let targets: Vec<String> = db
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.target_identifier)
            .collect();
        assert_eq!(targets, vec!["https://c.com", "https://b.com", "https://a.com"]);
    }

    #[tokio::test]
    async fn ids_increase_monotonically() {
        let db = test_db().await;
        let first = db.append(&HistoryEntry::new("a", "b")).await.unwrap();
        let second = db.append(&HistoryEntry::new("a", "b")).await.unwrap();
        assert!(second.id > first.id);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn entries_without_names_read_back_as_none() {
        let db = test_db().await;
        db.append(&HistoryEntry::new("https://a.com", "https://us.io"))
            .await
            .unwrap();
        let record = &db.list_all().await.unwrap()[0];
        assert_eq!(record.target_name, None);
        assert_eq!(record.my_name, None);
    }
}
