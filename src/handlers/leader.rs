//! Leader handlers: index, show, create, update, destroy.

use crate::error::ApiError;
use crate::handlers::json_body;
use crate::model::{LeaderPatch, NewLeader};
use crate::response;
use crate::service::LeaderService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let leaders = LeaderService::get_all(state.store.as_ref())
        .await
        .map_err(ApiError::with(StatusCode::INTERNAL_SERVER_ERROR))?;
    Ok(response::many(leaders))
}

pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let leader = LeaderService::get_one_by_leader_name(state.store.as_ref(), &name)
        .await
        .map_err(ApiError::with(StatusCode::NOT_FOUND))?;
    Ok(response::ok(leader))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewLeader>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = json_body(body)?;
    let leader = LeaderService::create(state.store.as_ref(), &new)
        .await
        .map_err(ApiError::with(StatusCode::BAD_REQUEST))?;
    Ok(response::created(leader))
}

pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<LeaderPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = json_body(body)?;
    let store = state.store.as_ref();
    let mut leader = LeaderService::get_one_by_leader_name(store, &name)
        .await
        .map_err(ApiError::with(StatusCode::BAD_REQUEST))?;
    let updated = LeaderService::update(store, &mut leader, patch)
        .await
        .map_err(ApiError::with(StatusCode::BAD_REQUEST))?;
    Ok(response::ok(updated))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.as_ref();
    let leader = LeaderService::get_one_by_leader_name(store, &name)
        .await
        .map_err(ApiError::with(StatusCode::NOT_FOUND))?;
    LeaderService::destroy(store, &leader)
        .await
        .map_err(ApiError::with(StatusCode::NOT_FOUND))?;
    Ok(response::no_content())
}
