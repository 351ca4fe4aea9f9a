//! SQLite-backed task mirror.
//!
//! # Responsibility
//! - Keep the whole task list as one JSON document under a single key.
//! - Validate connection shape before any read/write.
//!
//! # Invariants
//! - Exactly one mirror key exists; every save replaces its value.
//! - Malformed persisted JSON is logged and read as the empty list.

use super::{StorageError, StorageResult, TaskStorage};
use crate::db::migrations::latest_version;
use crate::model::task::Task;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

/// Mirror key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// SQLite-backed implementation of [`TaskStorage`].
pub struct SqliteTaskStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStorage<'conn> {
    /// Validates the connection and wraps it as task storage.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when the `kv` table is absent.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(StorageError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        if !table_exists(conn, "kv")? {
            return Err(StorageError::MissingRequiredTable("kv"));
        }

        Ok(Self { conn })
    }
}

impl TaskStorage for SqliteTaskStorage<'_> {
    fn load(&self) -> StorageResult<Vec<Task>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [TASKS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(document) = document else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&document) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "event=mirror_load module=storage status=malformed fallback=empty error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let document = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_KEY, document],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table_name: &str) -> StorageResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
