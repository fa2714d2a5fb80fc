use std::sync::Arc;

use crate::config::{Config, LogFormat};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tourism_core::{DashboardState, DataService, DataServiceTrait};

pub struct AppState {
    pub dashboard: Arc<DashboardState>,
}

impl AppState {
    pub fn new(data_service: Arc<dyn DataServiceTrait>) -> Self {
        Self {
            dashboard: Arc::new(DashboardState::new(data_service)),
        }
    }
}

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded through it.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    config.tourism.validate()?;
    let data_service = Arc::new(DataService::from_config(config.tourism.clone()));

    let source = &data_service.config().source;
    tracing::info!(
        "Reading datasets from {} ({}), proxy {}, local fallback {}",
        source.repository,
        source.branch,
        if source.use_proxy { "on" } else { "off" },
        if source.fallback_to_local {
            source.local_data_dir.as_str()
        } else {
            "off"
        }
    );

    Ok(Arc::new(AppState::new(data_service)))
}
