//! Country handlers: index, show, create, update, destroy.

use crate::error::ApiError;
use crate::handlers::json_body;
use crate::model::{CountryPatch, NewCountry};
use crate::response;
use crate::service::CountryService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let countries = CountryService::get_all(state.store.as_ref())
        .await
        .map_err(ApiError::with(StatusCode::INTERNAL_SERVER_ERROR))?;
    Ok(response::many(countries))
}

pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let country = CountryService::get_one_by_country_name(state.store.as_ref(), &name)
        .await
        .map_err(ApiError::with(StatusCode::NOT_FOUND))?;
    Ok(response::ok(country))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCountry>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = json_body(body)?;
    let country = CountryService::create(state.store.as_ref(), &new)
        .await
        .map_err(ApiError::with(StatusCode::BAD_REQUEST))?;
    Ok(response::created(country))
}

pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<CountryPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = json_body(body)?;
    let store = state.store.as_ref();
    let mut country = CountryService::get_one_by_country_name(store, &name)
        .await
        .map_err(ApiError::with(StatusCode::BAD_REQUEST))?;
    let updated = CountryService::update(store, &mut country, patch)
        .await
        .map_err(ApiError::with(StatusCode::BAD_REQUEST))?;
    Ok(response::ok(updated))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.as_ref();
    let country = CountryService::get_one_by_country_name(store, &name)
        .await
        .map_err(ApiError::with(StatusCode::NOT_FOUND))?;
    CountryService::destroy(store, &country)
        .await
        .map_err(ApiError::with(StatusCode::NOT_FOUND))?;
    Ok(response::no_content())
}
