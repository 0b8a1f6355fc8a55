//! Side-by-side comparison of the selected profiles.

use crate::catalog::{AqiLabel, CrimeStatus, ProfileRecord, MAX_SCORE};
use serde::Serialize;

/// Series colors, assigned by selection position.
pub const SERIES_COLORS: [&str; 3] = ["#0f766e", "#f59e0b", "#6366f1"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RadarAxis {
    Safety,
    #[serde(rename = "Civic Sense")]
    CivicSense,
    Hospitality,
    Infrastructure,
    Culture,
}

impl RadarAxis {
    pub const ALL: [RadarAxis; 5] = [
        RadarAxis::Safety,
        RadarAxis::CivicSense,
        RadarAxis::Hospitality,
        RadarAxis::Infrastructure,
        RadarAxis::Culture,
    ];

    pub fn score(&self, profile: &ProfileRecord) -> f32 {
        match self {
            RadarAxis::Safety => profile.women_safety_score,
            RadarAxis::CivicSense => profile.civic_sense_score,
            RadarAxis::Hospitality => profile.hospitality_score,
            RadarAxis::Infrastructure => profile.infrastructure_score,
            RadarAxis::Culture => profile.cultural_richness_score,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxisInfo {
    pub subject: RadarAxis,
    pub full_mark: f32,
}

/// One record's score vector, ordered like [`RadarAxis::ALL`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeries {
    pub id: String,
    pub name: String,
    pub color: &'static str,
    pub values: [f32; 5],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChart {
    pub axes: Vec<RadarAxisInfo>,
    pub series: Vec<RadarSeries>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonColumn {
    pub id: String,
    pub name: String,
    pub capital: String,
    pub image_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMetric {
    Languages,
    AirQuality,
    WomenSafety,
    CivicSense,
    Infrastructure,
    CrimeRate,
    BestTimeToVisit,
}

impl ComparisonMetric {
    pub const ALL: [ComparisonMetric; 7] = [
        ComparisonMetric::Languages,
        ComparisonMetric::AirQuality,
        ComparisonMetric::WomenSafety,
        ComparisonMetric::CivicSense,
        ComparisonMetric::Infrastructure,
        ComparisonMetric::CrimeRate,
        ComparisonMetric::BestTimeToVisit,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ComparisonMetric::Languages => "Languages",
            ComparisonMetric::AirQuality => "Air Quality (AQI)",
            ComparisonMetric::WomenSafety => "Women's Safety",
            ComparisonMetric::CivicSense => "Civic Sense",
            ComparisonMetric::Infrastructure => "Infrastructure",
            ComparisonMetric::CrimeRate => "Crime Rate",
            ComparisonMetric::BestTimeToVisit => "Best Time to Visit",
        }
    }

    fn cell(&self, profile: &ProfileRecord) -> MetricCell {
        match self {
            ComparisonMetric::Languages => MetricCell::Text {
                text: profile.languages.join(", "),
            },
            ComparisonMetric::AirQuality => MetricCell::Aqi {
                value: profile.aqi.value,
                label: profile.aqi.label(),
                is_realtime: profile.aqi.is_realtime,
            },
            ComparisonMetric::WomenSafety => MetricCell::Score {
                value: profile.women_safety_score,
                max: MAX_SCORE,
                description: Some(profile.safety_description.clone()),
            },
            ComparisonMetric::CivicSense => MetricCell::Score {
                value: profile.civic_sense_score,
                max: MAX_SCORE,
                description: Some(profile.civic_sense_description.clone()),
            },
            ComparisonMetric::Infrastructure => MetricCell::Score {
                value: profile.infrastructure_score,
                max: MAX_SCORE,
                description: None,
            },
            ComparisonMetric::CrimeRate => MetricCell::Crime {
                status: profile.crime_status,
            },
            ComparisonMetric::BestTimeToVisit => MetricCell::Text {
                text: profile.best_time_to_visit.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MetricCell {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Aqi {
        value: u32,
        label: AqiLabel,
        is_realtime: bool,
    },
    Score {
        value: f32,
        max: f32,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Crime {
        status: CrimeStatus,
    },
}

/// One metric across all selected profiles, cells in column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub metric: ComparisonMetric,
    pub title: &'static str,
    pub cells: Vec<MetricCell>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<MetricRow>,
    pub radar: RadarChart,
    pub loading: bool,
}

impl ComparisonView {
    /// Builds the table and radar for `profiles`, kept in the given order.
    pub fn assemble(profiles: &[ProfileRecord], loading: bool) -> Self {
        let columns = profiles
            .iter()
            .map(|p| ComparisonColumn {
                id: p.id.clone(),
                name: p.name.clone(),
                capital: p.capital.clone(),
                image_url: p.image_url.clone(),
            })
            .collect();

        let rows = ComparisonMetric::ALL
            .iter()
            .map(|metric| MetricRow {
                metric: *metric,
                title: metric.title(),
                cells: profiles.iter().map(|p| metric.cell(p)).collect(),
            })
            .collect();

        let axes = RadarAxis::ALL
            .iter()
            .map(|axis| RadarAxisInfo {
                subject: *axis,
                full_mark: MAX_SCORE,
            })
            .collect();

        let series = profiles
            .iter()
            .enumerate()
            .map(|(position, p)| RadarSeries {
                id: p.id.clone(),
                name: p.name.clone(),
                color: SERIES_COLORS[position % SERIES_COLORS.len()],
                values: RadarAxis::ALL.map(|axis| axis.score(p)),
            })
            .collect();

        ComparisonView {
            columns,
            rows,
            radar: RadarChart { axes, series },
            loading,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
