use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inditravel_server::air_quality::{AirQualitySource, OpenMeteoClient};
use inditravel_server::catalog::{load_catalog, CatalogStore};
use inditravel_server::config::{AppConfig, CliConfig, FileConfig};
use inditravel_server::enrichment::run_enrichment;
use inditravel_server::server::{metrics, run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON catalog of state profiles.
    #[clap(value_parser = parse_path)]
    pub catalog_path: Option<PathBuf>,

    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of profile responses in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Skip the live AQI refresh and serve catalog values only.
    #[clap(long)]
    pub no_live_aqi: bool,

    /// Base URL of the Open-Meteo air quality API.
    #[clap(long)]
    pub aqi_base_url: Option<String>,

    /// Timeout in seconds for each air quality request.
    #[clap(long, default_value_t = 10)]
    pub aqi_timeout_sec: u64,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            catalog_path: args.catalog_path.clone(),
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
            no_live_aqi: args.no_live_aqi,
            aqi_base_url: args.aqi_base_url.clone(),
            aqi_timeout_sec: args.aqi_timeout_sec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    info!("Loading catalog at {:?}...", app_config.catalog_path);
    let profiles = load_catalog(&app_config.catalog_path)
        .with_context(|| format!("Failed to load catalog {:?}", app_config.catalog_path))?;

    // Initialize metrics system
    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::set_catalog_profiles(profiles.len());

    let catalog_store = if app_config.air_quality.enabled {
        let store = Arc::new(CatalogStore::pending(profiles));
        let source: Arc<dyn AirQualitySource> = Arc::new(OpenMeteoClient::new(
            &app_config.air_quality.base_url,
            app_config.air_quality.timeout_sec,
        )?);
        info!(
            "Live AQI enabled, querying {}",
            app_config.air_quality.base_url
        );
        tokio::spawn(run_enrichment(store.clone(), source));
        store
    } else {
        info!("Live AQI disabled, serving catalog values");
        Arc::new(CatalogStore::ready(profiles))
    };

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        metrics_port: app_config.metrics_port,
        content_cache_age_sec: app_config.content_cache_age_sec,
        frontend_dir_path: app_config.frontend_dir_path,
    };

    info!("Ready to serve at port {}!", server_config.port);
    info!("Metrics available at port {}!", server_config.metrics_port);
    run_server(catalog_store, server_config).await
}
