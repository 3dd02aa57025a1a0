use crate::handlers::leader::{create, destroy, index, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/leaders` with and without a trailing slash, plus `/leaders/:name`.
pub fn leader_routes(state: AppState) -> Router {
    Router::new()
        .route("/leaders", get(index).post(create))
        .route("/leaders/", get(index).post(create))
        .route("/leaders/:name", get(show).patch(update).delete(destroy))
        .with_state(state)
}
