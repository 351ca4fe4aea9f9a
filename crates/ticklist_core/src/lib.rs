//! Core domain logic for ticklist.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::task::{Task, TaskId};
pub use storage::{SqliteTaskStorage, StorageError, StorageResult, TaskStorage, TASKS_KEY};
pub use store::task_store::{StoreResult, TaskStore};
pub use view::render::{
    format_plain, render, sanitize_display_text, ListRender, TaskRow, EMPTY_STATE_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
