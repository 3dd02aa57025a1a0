//! PostgreSQL store over a shared `PgPool`.

use super::Store;
use crate::config::Settings;
use crate::error::AppError;
use crate::model::{Country, Leader, NameOnly, NewCountry};
use crate::sql;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the process-wide pool from settings.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    async fn country_names(&self) -> Result<Vec<NameOnly>, AppError> {
        tracing::debug!(sql = %sql::country::SELECT_NAMES, "query");
        let rows = sqlx::query_as::<_, NameOnly>(sql::country::SELECT_NAMES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn countries_by_name(&self, name: &str) -> Result<Vec<Country>, AppError> {
        tracing::debug!(sql = %sql::country::SELECT_BY_NAME, params = ?[name], "query");
        let rows = sqlx::query_as::<_, Country>(sql::country::SELECT_BY_NAME)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn countries_by_id(&self, country_id: i32) -> Result<Vec<Country>, AppError> {
        tracing::debug!(sql = %sql::country::SELECT_BY_ID, country_id, "query");
        let rows = sqlx::query_as::<_, Country>(sql::country::SELECT_BY_ID)
            .bind(country_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn country_names_matching(&self, name: &str) -> Result<Vec<NameOnly>, AppError> {
        tracing::debug!(sql = %sql::country::SELECT_NAME_BY_NAME, params = ?[name], "query");
        let rows = sqlx::query_as::<_, NameOnly>(sql::country::SELECT_NAME_BY_NAME)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_country(&self, new: &NewCountry) -> Result<Country, AppError> {
        tracing::debug!(sql = %sql::country::INSERT, params = ?new, "query");
        let row = sqlx::query_as::<_, Country>(sql::country::INSERT)
            .bind(&new.name)
            .bind(&new.capital)
            .bind(new.population)
            .bind(&new.languages)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_country(&self, country: &Country) -> Result<Option<Country>, AppError> {
        tracing::debug!(sql = %sql::country::UPDATE, params = ?country, "query");
        let row = sqlx::query_as::<_, Country>(sql::country::UPDATE)
            .bind(&country.name)
            .bind(&country.capital)
            .bind(country.population)
            .bind(&country.languages)
            .bind(&country.fun_fact)
            .bind(&country.map_image_url)
            .bind(country.country_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError> {
        tracing::debug!(sql = %sql::country::DELETE_BY_NAME, params = ?[name], "query");
        let row = sqlx::query_as::<_, Country>(sql::country::DELETE_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn leader_names(&self) -> Result<Vec<NameOnly>, AppError> {
        tracing::debug!(sql = %sql::leader::SELECT_NAMES, "query");
        let rows = sqlx::query_as::<_, NameOnly>(sql::leader::SELECT_NAMES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn leaders_by_name(&self, name: &str) -> Result<Vec<Leader>, AppError> {
        tracing::debug!(sql = %sql::leader::SELECT_BY_NAME, params = ?[name], "query");
        let rows = sqlx::query_as::<_, Leader>(sql::leader::SELECT_BY_NAME)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn leader_names_matching(&self, name: &str) -> Result<Vec<NameOnly>, AppError> {
        tracing::debug!(sql = %sql::leader::SELECT_NAME_BY_NAME, params = ?[name], "query");
        let rows = sqlx::query_as::<_, NameOnly>(sql::leader::SELECT_NAME_BY_NAME)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_leader(&self, name: &str, years_in_service: i32, country_id: i32) -> Result<Leader, AppError> {
        tracing::debug!(
            sql = %sql::leader::INSERT,
            name = %name,
            years_in_service,
            country_id,
            "query"
        );
        let row = sqlx::query_as::<_, Leader>(sql::leader::INSERT)
            .bind(name)
            .bind(years_in_service)
            .bind(country_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_leader(&self, leader: &Leader) -> Result<Option<Leader>, AppError> {
        tracing::debug!(sql = %sql::leader::UPDATE, params = ?leader, "query");
        let row = sqlx::query_as::<_, Leader>(sql::leader::UPDATE)
            .bind(&leader.name)
            .bind(leader.years_in_service)
            .bind(leader.country_id)
            .bind(leader.leader_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_leader_by_name(&self, name: &str) -> Result<Option<Leader>, AppError> {
        tracing::debug!(sql = %sql::leader::DELETE_BY_NAME, params = ?[name], "query");
        let row = sqlx::query_as::<_, Leader>(sql::leader::DELETE_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
