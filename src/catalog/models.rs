//! Profile records as loaded from the static catalog.
//!
//! Field names follow the JSON catalog source (camelCase). The AQI label is
//! never stored: it is derived from the index value every time it's read.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Upper bound shared by every 0-10 score.
pub const MAX_SCORE: f32 = 10.0;

// =============================================================================
// Enumerations
// =============================================================================

/// Qualitative air quality band derived from a US AQI value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiLabel {
    Good,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Hazardous,
}

impl AqiLabel {
    /// Maps an index value to its band: <=50 Good, <=100 Moderate, <=200 Poor,
    /// <=300 Very Poor, anything above Hazardous.
    pub fn from_value(value: u32) -> Self {
        match value {
            0..=50 => AqiLabel::Good,
            51..=100 => AqiLabel::Moderate,
            101..=200 => AqiLabel::Poor,
            201..=300 => AqiLabel::VeryPoor,
            _ => AqiLabel::Hazardous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AqiLabel::Good => "Good",
            AqiLabel::Moderate => "Moderate",
            AqiLabel::Poor => "Poor",
            AqiLabel::VeryPoor => "Very Poor",
            AqiLabel::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for AqiLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrimeStatus {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for CrimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Adventure,
    Spiritual,
    Cultural,
    Food,
    Nature,
    Heritage,
}

/// Where a record stands with respect to the one-shot live AQI refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrichmentStatus {
    /// Lookup not attempted yet.
    #[default]
    Pending,
    /// Record has no coordinates, it always shows catalog data.
    NoCoordinates,
    /// AQI replaced by a live reading.
    Live,
    /// Lookup attempted and failed, catalog data kept.
    Failed,
    /// Live lookups are disabled, catalog data is final.
    Static,
}

// =============================================================================
// Records
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// European AQI sub-indices for the five tracked pollutants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EuropeanAqi {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
}

/// Air quality sub-record of a profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    pub value: u32,
    #[serde(default)]
    pub european_aqi: Option<EuropeanAqi>,
    /// Set only by a successful live lookup, never read from the catalog.
    #[serde(skip_deserializing)]
    pub is_realtime: bool,
}

impl AirQuality {
    pub fn from_static(value: u32) -> Self {
        AirQuality {
            value,
            european_aqi: None,
            is_realtime: false,
        }
    }

    pub fn label(&self) -> AqiLabel {
        AqiLabel::from_value(self.value)
    }
}

impl Serialize for AirQuality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AirQuality", 4)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("label", &self.label())?;
        state.serialize_field("europeanAqi", &self.european_aqi)?;
        state.serialize_field("isRealtime", &self.is_realtime)?;
        state.end()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub short_description: String,
    pub suggested_duration: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub capital: String,
    pub description: String,
    pub tagline: String,
    #[serde(default)]
    pub funny_stereotype: Option<String>,
    pub best_time_to_visit: String,
    pub image_url: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    pub languages: Vec<String>,
    pub safety_description: String,
    pub civic_sense_description: String,

    pub aqi: AirQuality,
    pub crime_status: CrimeStatus,
    pub hospitality_score: f32,
    pub infrastructure_score: f32,
    pub cultural_richness_score: f32,
    pub women_safety_score: f32,
    pub civic_sense_score: f32,

    #[serde(default)]
    pub activities: Vec<Activity>,

    #[serde(skip_deserializing)]
    pub enrichment: EnrichmentStatus,
}

impl ProfileRecord {
    /// All five scores with their field names, used by validation.
    pub fn scores(&self) -> [(&'static str, f32); 5] {
        [
            ("hospitalityScore", self.hospitality_score),
            ("infrastructureScore", self.infrastructure_score),
            ("culturalRichnessScore", self.cultural_richness_score),
            ("womenSafetyScore", self.women_safety_score),
            ("civicSenseScore", self.civic_sense_score),
        ]
    }
}
