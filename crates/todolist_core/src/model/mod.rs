//! Domain model for to-do list entries.
//!
//! # Responsibility
//! - Define the canonical data structure used by core business logic.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod task;
