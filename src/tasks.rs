//!
//! # Task Service
//!
//! Ownership-enforcing layer over the task store. Every operation takes the
//! authenticated user's id and answers `NotFound` when a task is missing
//! *or* owned by someone else; the two cases are indistinguishable on
//! purpose, mirroring the login flow's refusal to reveal which credential
//! was wrong.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{Task, TaskFilter, TaskInput, TaskUpdate};
use crate::store::TaskStore;

#[derive(Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Lists the user's tasks, newest first, narrowed by the filter.
    pub fn list(&self, user_id: Uuid, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        self.store.list(user_id, filter)
    }

    /// Creates a task for the user. New tasks start Active; priority
    /// defaults to Medium.
    pub fn create(&self, user_id: Uuid, input: TaskInput) -> Result<Task, AppError> {
        input.validate()?;
        let task = self.store.create(input, user_id)?;
        log::debug!("user {} created task {}", user_id, task.id);
        Ok(task)
    }

    pub fn get(&self, task_id: Uuid, user_id: Uuid) -> Result<Task, AppError> {
        self.store
            .get(task_id, user_id)?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Applies a partial update to one of the user's tasks. The update
    /// timestamp is refreshed even when the patch changes nothing visible.
    pub fn update(
        &self,
        task_id: Uuid,
        user_id: Uuid,
        update: TaskUpdate,
    ) -> Result<Task, AppError> {
        update.validate()?;
        self.store
            .update(task_id, user_id, update)?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub fn delete(&self, task_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if self.store.delete(task_id, user_id)? {
            log::debug!("user {} deleted task {}", user_id, task_id);
            Ok(())
        } else {
            Err(AppError::NotFound("Task not found".into()))
        }
    }
}
