//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Errors raised by the entity operations. Display is the bare message returned to clients.
#[derive(Error, Debug)]
pub enum AppError {
    /// Zero rows, or more than one, where exactly one was expected.
    #[error("{0}")]
    NotFound(String),
    /// A record with the same name (case-insensitive) already exists.
    #[error("{0}")]
    Conflict(String),
    /// The full-row update returned no row.
    #[error("{0}")]
    UpdateFailed(String),
    #[error("{0}")]
    BadRequest(String),
    /// Constraint violation reported by a non-SQL store (foreign key, check).
    #[error("{0}")]
    Constraint(String),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An [`AppError`] paired with the status its endpoint answers with.
/// Status is fixed per endpoint (index 500, show/destroy 404, create/update 400), not per error kind.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: AppError,
}

impl ApiError {
    pub fn new(status: StatusCode, error: AppError) -> Self {
        Self { status, error }
    }

    /// For use with `map_err`: `.map_err(ApiError::with(StatusCode::NOT_FOUND))`.
    pub fn with(status: StatusCode) -> impl Fn(AppError) -> ApiError {
        move |error| ApiError { status, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.error, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.error, "request rejected");
        }
        let body = ErrorBody {
            error: self.error.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}
