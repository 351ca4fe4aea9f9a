//! Single source of truth for the task list.
//!
//! # Responsibility
//! - Own the ordered in-memory list and its durable mirror.
//! - Provide create/toggle/update/delete with write-through persistence.
//!
//! # Invariants
//! - Insertion order is display order; delete removes in place without
//!   reordering the remaining tasks.
//! - Persistence runs as a post-condition of every successful mutation.
//! - Blank input and unknown ids are silent no-ops, never errors, and
//!   trigger no mirror write.

use crate::model::task::{Task, TaskId};
use crate::storage::{StorageError, StorageResult, TaskStorage};
use log::info;

pub type StoreResult<T> = Result<T, StorageError>;

/// Owns the task list and keeps its durable mirror in sync.
pub struct TaskStore<S: TaskStorage> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Opens the store, pulling the mirror once.
    ///
    /// Absent or malformed mirror state yields an empty list (the storage
    /// layer handles the degrade); only transport failures surface here.
    pub fn open(storage: S) -> StoreResult<Self> {
        let tasks = storage.load()?;
        info!(
            "event=store_open module=store status=ok task_count={}",
            tasks.len()
        );
        Ok(Self { storage, tasks })
    }

    /// Read-only snapshot of the current list in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new pending task with the trimmed text.
    ///
    /// Returns `Ok(None)` without touching the list or the mirror when the
    /// text is empty after trimming.
    pub fn create(&mut self, text: &str) -> StoreResult<Option<&Task>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let task = Task::new(trimmed);
        info!("event=task_create module=store status=ok id={}", task.id);
        self.tasks.push(task);
        self.persist()?;
        Ok(self.tasks.last())
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `Ok(false)` when no task has the given id.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        task.toggle();
        info!(
            "event=task_toggle module=store status=ok id={id} completed={}",
            task.completed
        );
        self.persist()?;
        Ok(true)
    }

    /// Replaces the text of the matching task with the trimmed value.
    ///
    /// Returns `Ok(false)` when no task has the given id or the replacement
    /// is empty after trimming; the list and the mirror stay untouched.
    pub fn update(&mut self, id: TaskId, new_text: &str) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        if !task.set_text(new_text) {
            return Ok(false);
        }
        info!("event=task_update module=store status=ok id={id}");
        self.persist()?;
        Ok(true)
    }

    /// Removes the matching task in place, preserving the order of the rest.
    ///
    /// Returns `Ok(false)` when no task has the given id.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let len_before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == len_before {
            return Ok(false);
        }

        info!("event=task_delete module=store status=ok id={id}");
        self.persist()?;
        Ok(true)
    }

    // Write-through mirror update; called after every successful mutation.
    fn persist(&self) -> StorageResult<()> {
        self.storage.save(&self.tasks)
    }
}
