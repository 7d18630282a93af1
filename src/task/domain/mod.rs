//! Domain model for task records.
//!
//! The task domain models record creation, partial updates, and filtered
//! listing while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod filter;
mod ids;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};
