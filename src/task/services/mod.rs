//! Application services for task record orchestration.

mod records;

pub use records::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
