//!
//! # Task Store
//!
//! In-memory store for task records. Every operation takes the owner's id
//! alongside the task id; a task owned by someone else behaves exactly like
//! a task that does not exist.
//!
//! A single `RwLock` guards the map: updates and deletes for the same task
//! id serialize on the write lock, so a concurrent update and delete resolve
//! deterministically. Listing takes the read lock and returns a snapshot
//! that may be immediately stale.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskFilter, TaskInput, TaskUpdate};

#[derive(Default)]
pub struct TaskStore {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, Task>>, AppError> {
        self.tasks
            .read()
            .map_err(|_| AppError::Internal("task store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Task>>, AppError> {
        self.tasks
            .write()
            .map_err(|_| AppError::Internal("task store lock poisoned".into()))
    }

    /// Creates a task owned by `user_id`. New tasks are always Active and
    /// default to Medium priority (see `Task::new`).
    pub fn create(&self, input: TaskInput, user_id: Uuid) -> Result<Task, AppError> {
        let task = Task::new(input, user_id);
        let mut tasks = self.write()?;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Point lookup scoped to an owner. Missing and not-owned both come back
    /// as `None`.
    pub fn get(&self, task_id: Uuid, user_id: Uuid) -> Result<Option<Task>, AppError> {
        let tasks = self.read()?;
        Ok(tasks
            .get(&task_id)
            .filter(|t| t.user_id == user_id)
            .cloned())
    }

    /// Lists the owner's tasks, narrowed by the filter, newest first.
    ///
    /// Provided filter options combine with AND; the creation-time ordering
    /// is part of the contract.
    pub fn list(&self, user_id: Uuid, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let tasks = self.read()?;
        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .filter(|t| filter.priority.map_or(true, |p| t.priority == p))
            .filter(|t| {
                filter
                    .search
                    .as_deref()
                    .map_or(true, |term| t.matches_search(term))
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    /// Applies a partial update to an owned task.
    ///
    /// Absent fields keep their prior values; `updated_at` is refreshed even
    /// when the patch is empty. Returns `None` when the task is missing or
    /// owned by someone else.
    pub fn update(
        &self,
        task_id: Uuid,
        user_id: Uuid,
        update: TaskUpdate,
    ) -> Result<Option<Task>, AppError> {
        let mut tasks = self.write()?;
        let task = match tasks.get_mut(&task_id).filter(|t| t.user_id == user_id) {
            Some(task) => task,
            None => return Ok(None),
        };

        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        task.updated_at = Utc::now();

        Ok(Some(task.clone()))
    }

    /// Removes an owned task. Returns `false` when nothing matched; a repeat
    /// delete is not an error.
    pub fn delete(&self, task_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let mut tasks = self.write()?;
        match tasks.get(&task_id) {
            Some(task) if task.user_id == user_id => {
                tasks.remove(&task_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus};

    fn input(title: &str, description: &str, priority: Option<TaskPriority>) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            priority,
        }
    }

    #[test]
    fn test_get_scopes_to_owner() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let task = store
            .create(input("Write spec", "Draft the design doc", None), owner)
            .unwrap();

        assert!(store.get(task.id, owner).unwrap().is_some());
        // Someone else's lookup sees nothing, same as a missing id.
        assert!(store.get(task.id, other).unwrap().is_none());
        assert!(store.get(Uuid::new_v4(), owner).unwrap().is_none());
    }

    #[test]
    fn test_list_orders_newest_first() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        for i in 0..5 {
            store
                .create(input(&format!("Task {}", i), "desc", None), owner)
                .unwrap();
        }

        let tasks = store.list(owner, &TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 5);
        for pair in tasks.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(tasks[0].title, "Task 4");
        assert_eq!(tasks[4].title, "Task 0");
    }

    #[test]
    fn test_list_filters_combine_with_and() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();

        let done = store
            .create(
                input(
                    "Complete project documentation",
                    "Write and review the docs",
                    Some(TaskPriority::High),
                ),
                owner,
            )
            .unwrap();
        store
            .update(
                done.id,
                owner,
                TaskUpdate {
                    status: Some(TaskStatus::Completed),
                    ..TaskUpdate::default()
                },
            )
            .unwrap();

        store
            .create(
                input("Buy groceries", "Milk and eggs", Some(TaskPriority::Low)),
                owner,
            )
            .unwrap();

        let completed = store
            .list(
                owner,
                &TaskFilter {
                    status: Some(TaskStatus::Completed),
                    ..TaskFilter::default()
                },
            )
            .unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, done.id);

        let searched = store
            .list(
                owner,
                &TaskFilter {
                    search: Some("doc".to_string()),
                    ..TaskFilter::default()
                },
            )
            .unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, done.id);

        // AND semantics: a matching search with a non-matching status is empty.
        let both = store
            .list(
                owner,
                &TaskFilter {
                    status: Some(TaskStatus::Active),
                    search: Some("doc".to_string()),
                    ..TaskFilter::default()
                },
            )
            .unwrap();
        assert!(both.is_empty());
    }

    #[test]
    fn test_list_never_crosses_owners() {
        let store = TaskStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.create(input("A's task", "private", None), a).unwrap();

        assert!(store.list(b, &TaskFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();
        let task = store
            .create(
                input("Write spec", "Draft the design doc", Some(TaskPriority::High)),
                owner,
            )
            .unwrap();

        let updated = store
            .update(
                task.id,
                owner,
                TaskUpdate {
                    status: Some(TaskStatus::Completed),
                    ..TaskUpdate::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Write spec");
        assert_eq!(updated.description, "Draft the design doc");
        assert_eq!(updated.priority, TaskPriority::High);
        assert_eq!(updated.status, TaskStatus::Completed);
        assert!(updated.updated_at > task.updated_at);
    }

    #[test]
    fn test_empty_update_still_bumps_timestamp() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();
        let task = store
            .create(input("Write spec", "Draft the design doc", None), owner)
            .unwrap();

        let updated = store
            .update(task.id, owner, TaskUpdate::default())
            .unwrap()
            .unwrap();
        assert!(updated.updated_at > task.updated_at);
        assert_eq!(updated.title, task.title);
    }

    #[test]
    fn test_update_by_non_owner_is_none() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();
        let task = store
            .create(input("Write spec", "Draft the design doc", None), owner)
            .unwrap();

        let result = store
            .update(
                task.id,
                Uuid::new_v4(),
                TaskUpdate {
                    title: Some("hijacked".to_string()),
                    ..TaskUpdate::default()
                },
            )
            .unwrap();
        assert!(result.is_none());

        // The task is untouched.
        let unchanged = store.get(task.id, owner).unwrap().unwrap();
        assert_eq!(unchanged.title, "Write spec");
    }

    #[test]
    fn test_delete_twice() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();
        let task = store
            .create(input("Write spec", "Draft the design doc", None), owner)
            .unwrap();

        assert!(store.delete(task.id, owner).unwrap());
        assert!(!store.delete(task.id, owner).unwrap());
    }

    #[test]
    fn test_delete_by_non_owner_is_false_and_preserves_task() {
        let store = TaskStore::new();
        let owner = Uuid::new_v4();
        let task = store
            .create(input("Write spec", "Draft the design doc", None), owner)
            .unwrap();

        assert!(!store.delete(task.id, Uuid::new_v4()).unwrap());
        assert!(store.get(task.id, owner).unwrap().is_some());
    }
}
