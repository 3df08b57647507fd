//! Gramsnap - a lightweight HTTP service that snapshots public Instagram profiles
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - Profile fetch endpoint                                   │
//! │  - Metrics endpoint                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Service Layer                            │
//! │  - Single linear fetch-and-persist workflow                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │       Scraper Layer          │        Storage Layer          │
//! │  - Instagram profile lookup  │  - Per-user JSON/HTML/media   │
//! │    (reqwest)                 │  - Append-only CSV log        │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers for the fetch and metrics endpoints
//! - `service`: Business logic layer
//! - `scraper`: Profile lookup against Instagram
//! - `data`: Record types
//! - `storage`: Local-disk artifact store and CSV log
//! - `config`: Configuration management
//! - `error`: Error types

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod scraper;
pub mod service;
pub mod storage;

use std::sync::Arc;

use scraper::{InstagramLookup, ProfileLookup};
use storage::{ArtifactStore, FetchLog};

/// Application state shared across all handlers
///
/// This struct is cloned for each request and contains
/// shared resources like the profile lookup, artifact store,
/// and HTTP client.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// Profile lookup collaborator
    pub lookup: Arc<dyn ProfileLookup>,

    /// Per-user artifact store
    pub artifacts: Arc<ArtifactStore>,

    /// Append-only CSV fetch log
    pub fetch_log: Arc<FetchLog>,

    /// HTTP client for outbound fetches
    pub http_client: Arc<reqwest::Client>,
}

impl AppState {
    /// Initialize application state with the live Instagram lookup
    ///
    /// # Steps
    /// 1. Build the shared HTTP client
    /// 2. Create the data directory if absent
    /// 3. Write the CSV log header if absent
    ///
    /// # Errors
    /// Returns error if any initialization step fails
    pub async fn new(config: config::AppConfig) -> Result<Self, error::AppError> {
        let http_client = Arc::new(build_http_client(&config.scraper)?);
        let lookup: Arc<dyn ProfileLookup> =
            Arc::new(InstagramLookup::new(Arc::clone(&http_client)));
        Self::assemble(config, lookup, http_client).await
    }

    /// Initialize application state with a caller-supplied lookup.
    ///
    /// Used by tests to stand the server up without touching the network.
    pub async fn with_lookup(
        config: config::AppConfig,
        lookup: Arc<dyn ProfileLookup>,
    ) -> Result<Self, error::AppError> {
        let http_client = Arc::new(build_http_client(&config.scraper)?);
        Self::assemble(config, lookup, http_client).await
    }

    async fn assemble(
        config: config::AppConfig,
        lookup: Arc<dyn ProfileLookup>,
        http_client: Arc<reqwest::Client>,
    ) -> Result<Self, error::AppError> {
        tracing::info!("Initializing application state...");

        let artifacts = Arc::new(ArtifactStore::new(config.storage.data_dir.clone()));
        artifacts.init().await?;
        tracing::info!(data_dir = %config.storage.data_dir.display(), "Artifact store ready");

        let fetch_log = Arc::new(FetchLog::new(config.storage.csv_log.clone()));
        fetch_log.init().await?;
        tracing::info!(csv_log = %config.storage.csv_log.display(), "Fetch log ready");

        Ok(Self {
            config: Arc::new(config),
            lookup,
            artifacts,
            fetch_log,
            http_client,
        })
    }
}

fn build_http_client(
    scraper: &config::ScraperConfig,
) -> Result<reqwest::Client, error::AppError> {
    let mut builder = reqwest::Client::builder().user_agent(&scraper.user_agent);

    // No default timeout: outbound calls run open-ended unless configured.
    if let Some(seconds) = scraper.timeout_seconds {
        builder = builder.timeout(std::time::Duration::from_secs(seconds));
    }

    builder
        .build()
        .map_err(|e| error::AppError::Internal(e.into()))
}

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::Router;
    use tower_http::{
        compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(api::profiles_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(api::metrics_router())
}

async fn health_check() -> &'static str {
    "OK"
}
