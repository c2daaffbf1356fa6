//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted shape of a to-do entry.
//! - Provide the default-value policy for creation timestamps.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `content` is non-empty for every persisted task.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failures for task state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `content` is empty; a task must carry text.
    EmptyContent,
    /// `id` is the nil UUID, which can never identify a task.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "task content must not be empty"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do entry with text content and a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID assigned at creation, immutable thereafter.
    pub id: TaskId,
    /// Free-form text. Required; presence is the only constraint.
    pub content: String,
    /// Creation time in Unix epoch milliseconds, defaulted to "now"
    /// when not supplied by the caller.
    pub created_at_ms: i64,
}

impl Task {
    /// Creates a new task with a generated ID and the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            created_at_ms: now_epoch_ms(),
        }
    }

    /// Creates a task with caller-provided identity and timestamp.
    ///
    /// Used by read paths reconstructing persisted rows and by tests that
    /// need deterministic ordering.
    pub fn with_parts(id: TaskId, content: impl Into<String>, created_at_ms: i64) -> Self {
        Self {
            id,
            content: content.into(),
            created_at_ms,
        }
    }

    /// Checks model invariants.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is empty.
    /// - `NilId` when `id` is the nil UUID.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.content.is_empty() {
            return Err(TaskValidationError::EmptyContent);
        }
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
