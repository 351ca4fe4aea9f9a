//! Task list store.
//!
//! # Responsibility
//! - Own the in-memory task list and orchestrate its durable mirror.
//!
//! # Invariants
//! - Every mutator persists write-through before returning success.
//! - Storage access never bypasses the mirror contract in `storage`.

pub mod task_store;
