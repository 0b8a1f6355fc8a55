//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own catalog and selection.

use super::constants::*;
use super::fixtures::create_test_catalog;
use inditravel_server::air_quality::{AirQualitySource, OpenMeteoClient};
use inditravel_server::catalog::{load_catalog, CatalogStore};
use inditravel_server::enrichment::run_enrichment;
use inditravel_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated catalog
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Store behind the server, for waiting on enrichment
    pub catalog_store: Arc<CatalogStore>,

    // Private fields - keep resources alive until drop
    _temp_catalog_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server serving the static test catalog as final data
    pub async fn spawn() -> Self {
        Self::spawn_inner(None).await
    }

    /// Spawns a server whose catalog is enriched from `aqi_base_url`
    /// in the background, like the production binary does.
    pub async fn spawn_with_live_aqi(aqi_base_url: &str) -> Self {
        Self::spawn_inner(Some(aqi_base_url)).await
    }

    async fn spawn_inner(aqi_base_url: Option<&str>) -> Self {
        let (temp_catalog_dir, catalog_path) =
            create_test_catalog().expect("Failed to create test catalog");
        let profiles = load_catalog(&catalog_path).expect("Failed to load test catalog");

        let catalog_store = match aqi_base_url {
            Some(base_url) => {
                let store = Arc::new(CatalogStore::pending(profiles));
                let source: Arc<dyn AirQualitySource> = Arc::new(
                    OpenMeteoClient::new(base_url, 2).expect("Failed to build AQI client"),
                );
                tokio::spawn(run_enrichment(store.clone(), source));
                store
            }
            None => Arc::new(CatalogStore::ready(profiles)),
        };

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            metrics_port: 0,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 60,
            frontend_dir_path: None,
        };

        let app = make_app(config, catalog_store.clone()).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            catalog_store,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }

    /// Waits until the enrichment pass has been published
    #[allow(dead_code)]
    pub async fn wait_for_enrichment(&self) {
        let start = std::time::Instant::now();
        while self.catalog_store.is_loading() {
            if start.elapsed() > Duration::from_millis(ENRICHMENT_TIMEOUT_MS) {
                panic!(
                    "Enrichment did not finish within {}ms",
                    ENRICHMENT_TIMEOUT_MS
                );
            }
            tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
