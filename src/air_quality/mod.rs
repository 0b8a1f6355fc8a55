//! Live air quality lookups.
//!
//! The enrichment pass only talks to the [`AirQualitySource`] trait, the
//! Open-Meteo HTTP client is the production implementation.

mod open_meteo;

pub use open_meteo::{OpenMeteoClient, OPEN_METEO_BASE_URL};

use crate::catalog::{Coordinates, EuropeanAqi};
use async_trait::async_trait;
use thiserror::Error;

/// A current reading for one location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirQualityReading {
    /// US AQI, unrounded, finite and non-negative.
    pub us_aqi: f64,
    /// Present only when all five pollutant sub-indices were reported.
    pub european: Option<EuropeanAqi>,
}

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error("Air quality request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Air quality service responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode air quality response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Air quality response has no usable index")]
    MissingIndex,
}

#[async_trait]
pub trait AirQualitySource: Send + Sync {
    /// Fetches the current reading at the given coordinates. One attempt,
    /// no retries.
    async fn current(&self, coordinates: Coordinates)
        -> Result<AirQualityReading, AirQualityError>;
}
