mod api;
mod config;
mod error;
mod main_lib;

use api::app_router;
use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config)?;

    // Initial load runs in the background; the dashboard serves empty data until it lands.
    let loader = state.clone();
    tokio::spawn(async move {
        if let Err(e) = loader.dashboard.refresh().await {
            tracing::warn!("Initial data load failed: {}", e);
        }
    });

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
