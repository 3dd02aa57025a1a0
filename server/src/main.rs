//! HTTP server: reads settings from env, opens the pool, serves until Ctrl-C, closes the pool.
//!
//! Run from repo root: `cargo run -p atlas-server`

use atlas_api::{build_app, connect, AppState, PgStore, Settings, Store};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("atlas_api=info,atlas_server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;
    let store = Arc::new(PgStore::new(pool));
    let state = AppState::new(store.clone());

    let app = build_app(state, settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. A listener error is logged and never resolves.
async fn wait_for_signal<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "failed to listen for shutdown signal; serving until killed");
        std::future::pending::<()>().await;
    }
}
