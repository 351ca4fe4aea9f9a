//! Durable mirror contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-list load/save contract for the task mirror.
//! - Isolate SQLite and serialization details from store orchestration.
//!
//! # Invariants
//! - `load` degrades to the empty list on absent or malformed state; it
//!   never surfaces a parse failure to the caller.
//! - `save` replaces the mirror wholesale; there are no partial writes.

use crate::db::DbError;
use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::{SqliteTaskStorage, TASKS_KEY};

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence error for the task mirror.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Connection has not been migrated to the version this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection is missing a table the mirror requires.
    MissingRequiredTable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "cannot serialize task list: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-list persistence contract for the task mirror.
pub trait TaskStorage {
    /// Reads the mirror; absent or malformed state yields the empty list.
    fn load(&self) -> StorageResult<Vec<Task>>;

    /// Overwrites the mirror with the full task list.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}
