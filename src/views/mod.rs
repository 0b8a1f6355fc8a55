//! Response shapes for the browse, detail and comparison views.

mod browse;
mod comparison;
mod detail;

pub use browse::{BrowseView, ProfileCard};
pub use comparison::{
    ComparisonColumn, ComparisonMetric, ComparisonView, MetricCell, MetricRow, RadarAxis,
    RadarAxisInfo, RadarChart, RadarSeries, SERIES_COLORS,
};
pub use detail::{AqiSeverity, DetailView, MeterBand, MetricMeter};
