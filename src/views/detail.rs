use crate::catalog::{ProfileRecord, MAX_SCORE};
use serde::Serialize;

/// Color band of a 0-10 score meter, on its fill percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MeterBand {
    Emerald,
    Yellow,
    Red,
}

impl MeterBand {
    pub fn from_percent(percent: f32) -> Self {
        if percent >= 80.0 {
            MeterBand::Emerald
        } else if percent >= 50.0 {
            MeterBand::Yellow
        } else {
            MeterBand::Red
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMeter {
    pub label: &'static str,
    pub value: f32,
    pub max: f32,
    pub percent: f32,
    pub band: MeterBand,
}

impl MetricMeter {
    pub fn new(label: &'static str, value: f32) -> Self {
        let percent = (value / MAX_SCORE * 100.0).clamp(0.0, 100.0);
        MetricMeter {
            label,
            value,
            max: MAX_SCORE,
            percent,
            band: MeterBand::from_percent(percent),
        }
    }
}

/// Styling band for the AQI card. Coarser than the label: everything above
/// 200 is red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AqiSeverity {
    Emerald,
    Yellow,
    Orange,
    Red,
}

impl AqiSeverity {
    pub fn from_value(value: u32) -> Self {
        match value {
            0..=50 => AqiSeverity::Emerald,
            51..=100 => AqiSeverity::Yellow,
            101..=200 => AqiSeverity::Orange,
            _ => AqiSeverity::Red,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub profile: ProfileRecord,
    pub meters: Vec<MetricMeter>,
    pub aqi_severity: AqiSeverity,
    pub loading: bool,
}

impl DetailView {
    pub fn new(profile: ProfileRecord, loading: bool) -> Self {
        let meters = vec![
            MetricMeter::new("Women's Safety", profile.women_safety_score),
            MetricMeter::new("Civic Sense", profile.civic_sense_score),
            MetricMeter::new("Hospitality", profile.hospitality_score),
            MetricMeter::new("Infrastructure", profile.infrastructure_score),
            MetricMeter::new("Cultural Richness", profile.cultural_richness_score),
        ];
        let aqi_severity = AqiSeverity::from_value(profile.aqi.value);
        DetailView {
            profile,
            meters,
            aqi_severity,
            loading,
        }
    }
}
