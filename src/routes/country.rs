use crate::handlers::country::{create, destroy, index, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/countries` with and without a trailing slash, plus `/countries/:name`.
pub fn country_routes(state: AppState) -> Router {
    Router::new()
        .route("/countries", get(index).post(create))
        .route("/countries/", get(index).post(create))
        .route("/countries/:name", get(show).patch(update).delete(destroy))
        .with_state(state)
}
