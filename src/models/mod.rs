pub mod task;
pub mod user;

pub use task::{Task, TaskFilter, TaskInput, TaskPriority, TaskStatus, TaskUpdate};
pub use user::{User, UserInput};
