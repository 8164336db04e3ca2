use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Represents the status of a task.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task is open. Every task starts in this state.
    Active,
    /// Task is done. Reachable only through an explicit update.
    Completed,
}

/// Represents the priority of a task.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// A task entity as stored and as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Identifier of the owning user. Set at creation, never changes.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task.
///
/// Status is not accepted here: new tasks are always Active. A missing
/// priority defaults to Medium.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Description must be between 1 and 1000 characters"
    ))]
    pub description: String,

    pub priority: Option<TaskPriority>,
}

/// Partial update for a task. Absent fields keep their prior values.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: Option<String>,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Description must be between 1 and 1000 characters"
    ))]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Recognized options for narrowing a task listing.
///
/// Provided options combine with logical AND. Unrecognized query keys are
/// ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct TaskFilter {
    /// Restrict to tasks with exactly this status.
    pub status: Option<TaskStatus>,
    /// Restrict to tasks with exactly this priority.
    pub priority: Option<TaskPriority>,
    /// Case-insensitive substring match against title or description.
    pub search: Option<String>,
}

impl Task {
    /// Builds a new task owned by `user_id`.
    ///
    /// Status is forced to Active regardless of input and priority falls
    /// back to Medium when unspecified.
    pub fn new(input: TaskInput, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Active,
            priority: input.priority.unwrap_or_default(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when `term` occurs in the title or description, ignoring case.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
