#![forbid(unsafe_code)]

use axum::routing::get;
use axum::Router;
use bestiary_model::{CreatureDataset, DatasetError};
use std::sync::Arc;

pub mod config;
pub mod http;

pub use config::ServerConfig;

pub const CRATE_NAME: &str = "bestiary-server";

/// Shared request state. The dataset is loaded once before serving and
/// read-only afterwards; a failed load is kept as the reason string so
/// the read endpoint can surface it.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Option<Arc<CreatureDataset>>,
    load_error: Option<String>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(loaded: Result<CreatureDataset, DatasetError>, config: ServerConfig) -> Self {
        match loaded {
            Ok(dataset) => Self {
                dataset: Some(Arc::new(dataset)),
                load_error: None,
                config: Arc::new(config),
            },
            Err(err) => Self {
                dataset: None,
                load_error: Some(err.to_string()),
                config: Arc::new(config),
            },
        }
    }

    /// The dataset, or the load failure reason.
    pub fn dataset(&self) -> Result<&Arc<CreatureDataset>, &str> {
        match &self.dataset {
            Some(dataset) => Ok(dataset),
            None => Err(self.load_error.as_deref().unwrap_or("dataset not loaded")),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.dataset.is_some()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/v1/version", get(http::handlers::version_handler))
        .route("/v1/creatures", get(http::handlers::creatures_handler))
        .route(
            "/v1/creatures/search",
            get(http::handlers::creatures_search_handler),
        )
        .with_state(state)
}
