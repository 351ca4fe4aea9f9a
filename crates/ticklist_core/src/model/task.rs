//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do record owned by the task store.
//! - Keep text normalization (trim, non-empty) on the write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming for every persisted task.
//! - `created_at` is captured once at construction and never rewritten.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One to-do item.
///
/// Field names are serialized in camelCase to match the mirror document
/// schema (`createdAt` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable ID used for toggle/edit/delete addressing.
    pub id: TaskId,
    /// Task text, trimmed and non-empty.
    pub text: String,
    /// Completion flag; flipped only by an explicit toggle.
    pub completed: bool,
    /// Local creation date, opaque and immutable after construction.
    pub created_at: String,
}

impl Task {
    /// Creates a pending task with a generated stable ID.
    ///
    /// The caller is responsible for passing already-trimmed, non-empty
    /// text; the store enforces that rule before construction.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a pending task with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic ordering by ID.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: local_date_string(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replaces the text with the trimmed replacement.
    ///
    /// Returns `false` without changing anything when the replacement is
    /// empty after trimming.
    pub fn set_text(&mut self, new_text: &str) -> bool {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.text = trimmed.to_string();
        true
    }
}

/// Returns today's local date as `YYYY-MM-DD`.
pub fn local_date_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
