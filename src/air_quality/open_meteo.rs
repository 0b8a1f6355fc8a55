//! Open-Meteo air quality API client.
//!
//! Free, unauthenticated, best-effort. See
//! <https://open-meteo.com/en/docs/air-quality-api>.

use super::{AirQualityError, AirQualityReading, AirQualitySource};
use crate::catalog::{Coordinates, EuropeanAqi};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const OPEN_METEO_BASE_URL: &str = "https://air-quality-api.open-meteo.com";

const CURRENT_FIELDS: &str = "us_aqi,european_aqi_pm2_5,european_aqi_pm10,european_aqi_no2,european_aqi_o3,european_aqi_so2";

pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct AirQualityResponse {
    current: Option<CurrentAirQuality>,
}

#[derive(Deserialize)]
struct CurrentAirQuality {
    us_aqi: Option<f64>,
    european_aqi_pm2_5: Option<f64>,
    european_aqi_pm10: Option<f64>,
    european_aqi_no2: Option<f64>,
    european_aqi_o3: Option<f64>,
    european_aqi_so2: Option<f64>,
}

impl CurrentAirQuality {
    fn european(&self) -> Option<EuropeanAqi> {
        Some(EuropeanAqi {
            pm2_5: self.european_aqi_pm2_5?,
            pm10: self.european_aqi_pm10?,
            no2: self.european_aqi_no2?,
            o3: self.european_aqi_o3?,
            so2: self.european_aqi_so2?,
        })
    }
}

fn reading_from_response(
    response: AirQualityResponse,
) -> Result<AirQualityReading, AirQualityError> {
    let current = response.current.ok_or(AirQualityError::MissingIndex)?;
    let us_aqi = match current.us_aqi {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => return Err(AirQualityError::MissingIndex),
    };
    Ok(AirQualityReading {
        us_aqi,
        european: current.european(),
    })
}

impl OpenMeteoClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://air-quality-api.open-meteo.com")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("inditravel-server/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn url(&self) -> String {
        format!("{}/v1/air-quality", self.base_url)
    }
}

#[async_trait]
impl AirQualitySource for OpenMeteoClient {
    async fn current(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirQualityReading, AirQualityError> {
        let response = self
            .client
            .get(self.url())
            .query(&[
                ("latitude", coordinates.lat.to_string()),
                ("longitude", coordinates.lng.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(AirQualityError::Request)?;

        if !response.status().is_success() {
            return Err(AirQualityError::Status(response.status()));
        }

        let body: AirQualityResponse = response.json().await.map_err(AirQualityError::Decode)?;
        reading_from_response(body)
    }
}
