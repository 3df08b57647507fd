//! Common test utilities for E2E tests

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use gramsnap::data::ProfileRecord;
use gramsnap::scraper::{LookupOutcome, ProfileLookup};
use gramsnap::{AppState, config};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Scripted profile lookup keyed by username.
///
/// Unscripted usernames resolve to `NotFound`.
pub struct ScriptedLookup {
    outcomes: HashMap<String, LookupOutcome>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }

    pub fn with(mut self, username: &str, outcome: LookupOutcome) -> Self {
        self.outcomes.insert(username.to_string(), outcome);
        self
    }
}

#[async_trait]
impl ProfileLookup for ScriptedLookup {
    async fn lookup(&self, username: &str) -> LookupOutcome {
        self.outcomes
            .get(username)
            .cloned()
            .unwrap_or(LookupOutcome::NotFound)
    }
}

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub _temp_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a test server with no scripted profiles
    pub async fn new() -> Self {
        Self::with_lookup(Arc::new(ScriptedLookup::new())).await
    }

    /// Create a test server around the given profile lookup
    pub async fn with_lookup(lookup: Arc<dyn ProfileLookup>) -> Self {
        gramsnap::metrics::init_metrics();

        // Temporary directory for artifacts and the CSV log
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(temp_dir.path());

        // Initialize app state
        let state = AppState::with_lookup(config, lookup).await.unwrap();

        // Create HTTP client
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        // Build router
        let app = gramsnap::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait a bit for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr: addr_str,
            state,
            _temp_dir: temp_dir,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Count data rows (header excluded) in the CSV fetch log
    pub fn log_row_count(&self) -> usize {
        let mut reader = csv::Reader::from_path(self.state.fetch_log.path()).unwrap();
        reader.records().count()
    }
}

fn test_config(base: &Path) -> config::AppConfig {
    config::AppConfig {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Let OS assign port
        },
        storage: config::StorageConfig {
            data_dir: base.join("accounts_data"),
            csv_log: base.join("instagram_data_log.csv"),
        },
        scraper: config::ScraperConfig {
            user_agent: "gramsnap-test".to_string(),
            timeout_seconds: Some(5),
        },
        logging: config::LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// A plausible public profile record for tests
pub fn sample_record(username: &str) -> ProfileRecord {
    ProfileRecord {
        username: username.to_string(),
        full_name: "Example User".to_string(),
        biography: "Just an example".to_string(),
        followers: 120,
        following: 85,
        posts: 42,
        // Port 9 (discard) refuses connections: unreachable by default
        profile_pic_url: "http://127.0.0.1:9/profile_pic.jpg".to_string(),
        external_url: Some("https://example.com".to_string()),
        is_business_account: false,
        is_verified: true,
    }
}

/// Spawn a one-route server handing out `body` as the profile picture.
///
/// Returns the full picture URL.
pub async fn spawn_media_server(body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = axum::Router::new().route(
        "/profile_pic.jpg",
        axum::routing::get(move || async move { body }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/profile_pic.jpg", addr)
}
