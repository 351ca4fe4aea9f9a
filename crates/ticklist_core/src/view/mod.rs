//! Task list view projection.
//!
//! # Responsibility
//! - Derive display state (count, empty flag, per-row fields) from a task
//!   snapshot and format it for a terminal.
//!
//! # Invariants
//! - The view never mutates the task list; it only reads a snapshot.
//! - Every render is a full rebuild; there is no incremental diffing.

pub mod render;
