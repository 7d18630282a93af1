//! REST API handlers for task records.
//!
//! One handler per operation, each translating between HTTP and the task
//! service. Identifier and filter validation happens here, before any store
//! access; service failures are mapped through [`ApiError::from_service`]
//! with an operation-specific generic message.

use crate::task::{
    domain::{TaskFilter, TaskId, TaskPriority, TaskStatus},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService, UpdateTaskRequest},
};
use crate::web::error::ApiError;
use actix_web::{HttpResponse, web};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters accepted by the list operation.
///
/// Values arrive as raw strings and are parsed into the typed filter here;
/// an unknown status or priority is rejected with 400 rather than silently
/// matching nothing.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    search: Option<String>,
    status: Option<String>,
    priority: Option<String>,
}

impl ListTasksQuery {
    fn into_filter(self) -> Result<TaskFilter, ApiError> {
        let mut filter = TaskFilter::new();
        if let Some(term) = self.search {
            filter = filter.with_search(term);
        }
        if let Some(raw) = self.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let status = TaskStatus::try_from(raw)
                .map_err(|_| ApiError::bad_request(format!("Invalid status filter: {raw}")))?;
            filter = filter.with_status(status);
        }
        if let Some(raw) = self
            .priority
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let priority = TaskPriority::try_from(raw)
                .map_err(|_| ApiError::bad_request(format!("Invalid priority filter: {raw}")))?;
            filter = filter.with_priority(priority);
        }
        Ok(filter)
    }
}

/// Create request body.
#[derive(Debug, Deserialize)]
pub struct CreateTaskBody {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

/// Update request body.
///
/// Every field is optional; omitted fields keep their stored values. The
/// description uses a double `Option` so an explicit `null` clears it while
/// an absent key leaves it alone.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskBody {
    title: Option<String>,
    #[serde(default, deserialize_with = "present_field")]
    description: Option<Option<String>>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

/// Wraps a present JSON value (including `null`) in `Some`, so serde's
/// default distinguishes absent keys.
fn present_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Serialize)]
struct DeleteConfirmation {
    message: &'static str,
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map(TaskId::new)
        .map_err(|_| ApiError::bad_request("Invalid task ID"))
}

/// GET `/tasks` — lists records matching the optional filter, newest update
/// first. An empty list is a successful response.
pub async fn list_tasks<R, C>(
    service: web::Data<TaskService<R, C>>,
    query: web::Query<ListTasksQuery>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let filter = query.into_inner().into_filter()?;
    let listed = service
        .list(&filter)
        .await
        .map_err(|err| ApiError::from_service(&err, "Failed to fetch tasks"))?;
    Ok(HttpResponse::Ok().json(listed))
}

/// GET `/tasks/{id}` — fetches a single record.
pub async fn get_task<R, C>(
    service: web::Data<TaskService<R, C>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&path)?;
    let found = service
        .get(id)
        .await
        .map_err(|err| ApiError::from_service(&err, "Failed to fetch task"))?;
    found.map_or_else(
        || Err(ApiError::not_found("Task not found")),
        |task| Ok(HttpResponse::Ok().json(task)),
    )
}

/// POST `/tasks` — creates a record; status defaults to `pending` and
/// priority to `medium` when omitted.
pub async fn create_task<R, C>(
    service: web::Data<TaskService<R, C>>,
    body: web::Json<CreateTaskBody>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let payload = body.into_inner();
    let title = payload
        .title
        .ok_or_else(|| ApiError::bad_request("Title is required"))?;

    let mut request = CreateTaskRequest::new(title);
    if let Some(description) = payload.description {
        request = request.with_description(description);
    }
    if let Some(status) = payload.status {
        request = request.with_status(status);
    }
    if let Some(priority) = payload.priority {
        request = request.with_priority(priority);
    }

    let created = service
        .create(request)
        .await
        .map_err(|err| ApiError::from_service(&err, "Failed to create task"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT `/tasks/{id}` — merges the supplied fields into an existing record.
pub async fn update_task<R, C>(
    service: web::Data<TaskService<R, C>>,
    path: web::Path<String>,
    body: web::Json<UpdateTaskBody>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&path)?;
    let payload = body.into_inner();

    let mut request = UpdateTaskRequest::new();
    if let Some(title) = payload.title {
        request = request.with_title(title);
    }
    if let Some(description) = payload.description {
        request = request.with_description(description);
    }
    if let Some(status) = payload.status {
        request = request.with_status(status);
    }
    if let Some(priority) = payload.priority {
        request = request.with_priority(priority);
    }

    let updated = service
        .update(id, request)
        .await
        .map_err(|err| ApiError::from_service(&err, "Failed to update task"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE `/tasks/{id}` — removes a record permanently.
pub async fn delete_task<R, C>(
    service: web::Data<TaskService<R, C>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&path)?;
    service
        .delete(id)
        .await
        .map_err(|err| ApiError::from_service(&err, "Failed to delete task"))?;
    Ok(HttpResponse::Ok().json(DeleteConfirmation {
        message: "Task deleted successfully",
    }))
}
