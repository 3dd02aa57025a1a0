//! HTTP handlers for country and leader CRUD.

pub mod country;
pub mod leader;

use crate::error::{ApiError, AppError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

/// Unwrap a JSON body, answering 400 with the rejection text when it is missing or malformed.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(v)| v)
        .map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, AppError::BadRequest(rejection.body_text())))
}
