//! Router assembly: middleware stack and mounted entity routers.

use crate::routes::{common_routes_with_ready, country_routes, leader_routes};
use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: `/countries`, `/leaders`, and the health routes, with CORS,
/// request tracing and a body size limit applied to every route.
pub fn build_app(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(country_routes(state.clone()))
        .merge(leader_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
