//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};

/// Use-case service wrapper for task CRUD operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a task from submitted content.
    ///
    /// # Contract
    /// - Assigns a fresh stable ID and the current creation time.
    /// - Returns the created task ID.
    pub fn create(&self, content: impl Into<String>) -> RepoResult<TaskId> {
        let task = Task::new(content);
        self.repo.create_task(&task)
    }

    /// Gets one task by ID.
    pub fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists all tasks in stable creation order.
    pub fn list_all(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }

    /// Replaces the content of an existing task.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_content(&self, id: TaskId, content: &str) -> RepoResult<()> {
        self.repo.update_content(id, content)
    }

    /// Deletes a task by ID.
    pub fn delete(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }
}
