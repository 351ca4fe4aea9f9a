//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record used by store, storage and view.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is hard removal; there are no tombstones in this domain.

pub mod task;
