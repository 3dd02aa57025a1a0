//! Storage capability: the raw statements behind the entity operations.
//! Every method is one round-trip; the services decide what zero or many rows mean.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{connect, PgStore};

use crate::error::AppError;
use crate::model::{Country, Leader, NameOnly, NewCountry};
use async_trait::async_trait;

#[async_trait]
pub trait Store: Send + Sync {
    /// Round-trip used by the readiness check.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release pooled connections. Later calls fail.
    async fn close(&self);

    async fn country_names(&self) -> Result<Vec<NameOnly>, AppError>;
    /// Case-insensitive exact match on name, all columns.
    async fn countries_by_name(&self, name: &str) -> Result<Vec<Country>, AppError>;
    async fn countries_by_id(&self, country_id: i32) -> Result<Vec<Country>, AppError>;
    /// Case-insensitive exact match on name, name column only (existence check).
    async fn country_names_matching(&self, name: &str) -> Result<Vec<NameOnly>, AppError>;
    async fn insert_country(&self, new: &NewCountry) -> Result<Country, AppError>;
    /// Full-row update keyed by `country_id`; `None` when no row has that id.
    async fn update_country(&self, country: &Country) -> Result<Option<Country>, AppError>;
    /// Case-sensitive delete by name; returns the deleted row, if any.
    async fn delete_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError>;

    async fn leader_names(&self) -> Result<Vec<NameOnly>, AppError>;
    async fn leaders_by_name(&self, name: &str) -> Result<Vec<Leader>, AppError>;
    async fn leader_names_matching(&self, name: &str) -> Result<Vec<NameOnly>, AppError>;
    async fn insert_leader(&self, name: &str, years_in_service: i32, country_id: i32) -> Result<Leader, AppError>;
    async fn update_leader(&self, leader: &Leader) -> Result<Option<Leader>, AppError>;
    async fn delete_leader_by_name(&self, name: &str) -> Result<Option<Leader>, AppError>;
}
