//! One-shot schema setup: create the target database if missing, then run the schema SQL file.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Schema shipped with the crate: `country` and `leader` tables plus seed rows.
pub const SCHEMA_SQL: &str = include_str!("../db/countries.sql");

/// Execute a multi-statement SQL script as-is. Not idempotent unless the script is
/// (the shipped one drops and recreates both tables).
pub async fn apply_schema(pool: &PgPool, sql: &str) -> Result<(), AppError> {
    tracing::debug!(bytes = sql.len(), "applying schema");
    sqlx::raw_sql(sql).execute(pool).await?;
    Ok(())
}

/// Connect to the server's `postgres` database and create the database named in
/// `database_url` when it does not exist yet.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_name(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Returns (url of the `postgres` admin database, target database name).
fn split_database_name(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DB_URL: no database path".into()))?
        + 1;
    let (base, rest) = url.split_at(path_start);
    let db_name = rest.split('?').next().unwrap_or("").trim();
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
