//! One-shot schema setup: creates the database if needed, runs the schema SQL, closes the pool.
//!
//! Uses `db/countries.sql` compiled into the crate unless `SCHEMA_PATH` names another file.

use atlas_api::{apply_schema, connect, ensure_database_exists, Settings, SCHEMA_SQL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("atlas_api=info,atlas_setup=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let sql = match std::env::var("SCHEMA_PATH") {
        Ok(path) => {
            tracing::info!(path = %path, "reading schema file");
            tokio::fs::read_to_string(&path).await?
        }
        Err(_) => SCHEMA_SQL.to_string(),
    };

    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(&settings).await?;
    let result = apply_schema(&pool, &sql).await;
    pool.close().await;
    result?;

    tracing::info!("Set up complete");
    Ok(())
}
