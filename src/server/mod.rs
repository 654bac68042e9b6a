//! HTTP server setup and routing.

mod extractors;
mod mood;
mod routes;
mod search;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::pipeline::Pipeline;
use crate::source::{Recommender, SpotifyClient};

pub use extractors::{Payload, QueryParams, WireFormat};
pub use routes::Wire;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Scorer and catalog, built once at startup
    pub pipeline: Arc<Pipeline>,
    /// Live source in front of the catalog, if configured
    pub recommender: Recommender,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    /// Build the standard pipeline and, when enabled and credentialed, the
    /// live music source.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let pipeline = Pipeline::standard()?;

        let recommender = if config.music_service.enabled {
            let client = SpotifyClient::new(&config.music_service)?;
            if client.has_credentials() {
                info!("Live music source enabled");
                Recommender::with_source(Arc::new(client))
            } else {
                warn!("Live music source enabled without credentials, serving catalog only");
                Recommender::catalog_only()
            }
        } else {
            Recommender::catalog_only()
        };

        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            recommender,
            started_at: Instant::now(),
        })
    }

    /// Replace the recommender, e.g. with an in-process track source
    pub fn with_recommender(mut self, recommender: Recommender) -> Self {
        self.recommender = recommender;
        self
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/analyze", post(mood::analyze))
        .route("/moods", get(mood::list_moods))
        .route("/recommend/:mood", get(mood::recommend))
        .route("/search", get(search::search));

    Router::new()
        .route("/", get(routes::info))
        .nest("/api/v1", api_routes)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
