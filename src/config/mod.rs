mod file_config;

pub use file_config::{AirQualityConfig, FileConfig};

use crate::air_quality::OPEN_METEO_BASE_URL;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub no_live_aqi: bool,
    pub aqi_base_url: Option<String>,
    pub aqi_timeout_sec: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub catalog_path: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,

    pub air_quality: AirQualitySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirQualitySettings {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_sec: u64,
}

impl Default for AirQualitySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: OPEN_METEO_BASE_URL.to_string(),
            timeout_sec: 10,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("catalog_path must be specified on the command line or in config file")
            })?;

        if !catalog_path.exists() {
            bail!("Catalog file does not exist: {:?}", catalog_path);
        }
        if !catalog_path.is_file() {
            bail!("catalog_path is not a file: {:?}", catalog_path);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);
        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let aq_file = file.air_quality.unwrap_or_default();
        let defaults = AirQualitySettings::default();
        let air_quality = AirQualitySettings {
            enabled: aq_file.enabled.unwrap_or(!cli.no_live_aqi),
            base_url: aq_file
                .base_url
                .or_else(|| cli.aqi_base_url.clone())
                .unwrap_or(defaults.base_url),
            timeout_sec: aq_file.timeout_sec.unwrap_or(cli.aqi_timeout_sec),
        };
        if air_quality.timeout_sec == 0 {
            bail!("air_quality timeout_sec must be greater than 0");
        }

        Ok(Self {
            catalog_path,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            air_quality,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
