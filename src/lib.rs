//! Atlas API: REST backend for countries and their leaders over PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::Settings;
pub use error::{ApiError, AppError, ConfigError};
pub use migration::{apply_schema, ensure_database_exists, SCHEMA_SQL};
pub use model::{Country, CountryPatch, CountryRef, Leader, LeaderPatch, NameOnly, NewCountry, NewLeader};
pub use routes::{common_routes_with_ready, country_routes, leader_routes};
pub use service::{CountryService, LeaderService};
pub use state::AppState;
pub use store::{connect, MemoryStore, PgStore, Store};
