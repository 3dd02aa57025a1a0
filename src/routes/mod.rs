//! Routers: health/ready/version plus one router per entity.

mod common;
mod country;
mod leader;

pub use common::common_routes_with_ready;
pub use country::country_routes;
pub use leader::leader_routes;
