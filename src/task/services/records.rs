//! Service layer for task record creation, retrieval, update, and deletion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskFilter, TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status; defaults to `pending` when omitted.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the initial priority; defaults to `medium` when omitted.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for partially updating a task record.
///
/// Fields left as `None` keep their stored values. The description carries a
/// nested `Option` so callers can distinguish "leave unchanged" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl UpdateTaskRequest {
    /// Creates an empty request that only refreshes the update timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(title)?;
        }
        if let Some(description) = self.description {
            patch = patch.with_description(description);
        }
        if let Some(status) = self.status {
            patch = patch.with_status(status);
        }
        if let Some(priority) = self.priority {
            patch = patch.with_priority(priority);
        }
        Ok(patch)
    }
}

/// Service-level errors for task record operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task record orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task record, applying defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when title validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let mut draft = TaskDraft::new(request.title)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = request.status {
            draft = draft.with_status(status);
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(priority);
        }

        let created_at = self.clock.utc();
        Ok(self.repository.insert(&draft, created_at).await?)
    }

    /// Retrieves a task record by identifier.
    ///
    /// Returns `Ok(None)` when no record exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists task records matching the filter, newest update first.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Merges a partial update into an existing record.
    ///
    /// Fields omitted from the request keep their stored values; the update
    /// timestamp always advances. Concurrent updates for the same identifier
    /// are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a supplied title is blank,
    /// or [`TaskServiceError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the record does not exist.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let patch = request.into_patch()?;
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        task.apply(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the record does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
