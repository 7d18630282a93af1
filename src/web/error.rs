//! Uniform error-to-status-code mapping for the REST API.

use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// API-level error carrying the client-visible message.
///
/// Persistence causes are logged server-side at the mapping boundary and
/// never leak into the response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request failed validation before reaching the store.
    #[error("{0}")]
    BadRequest(String),

    /// No record exists for the requested identifier.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store or rendering failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a 400 error with the given client-visible message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates a 404 error with the given client-visible message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a 500 error with a generic client-visible message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Maps a service failure onto the API taxonomy.
    ///
    /// `internal_message` is the operation-specific generic message returned
    /// for unexpected store failures; the underlying cause is logged here and
    /// not exposed to the caller.
    #[must_use]
    pub fn from_service(err: &TaskServiceError, internal_message: &str) -> Self {
        match err {
            TaskServiceError::Domain(TaskDomainError::EmptyTitle) => {
                Self::bad_request("Title is required")
            }
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::not_found("Task not found")
            }
            TaskServiceError::Repository(TaskRepositoryError::Persistence(cause)) => {
                log::error!("{internal_message}: {cause}");
                Self::internal(internal_message)
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
