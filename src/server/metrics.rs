use crate::enrichment::EnrichmentSummary;
use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all IndiTravel metrics
const PREFIX: &str = "inditravel";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Catalog Metrics
    pub static ref CATALOG_PROFILES: Gauge = Gauge::new(
        format!("{PREFIX}_catalog_profiles"),
        "Number of profiles in the catalog"
    ).expect("Failed to create catalog_profiles metric");

    // Enrichment Metrics
    pub static ref AQI_LOOKUPS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_aqi_lookups_total"), "Live AQI lookups by outcome"),
        &["outcome"]
    ).expect("Failed to create aqi_lookups_total metric");

    pub static ref ENRICHMENT_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            format!("{PREFIX}_enrichment_duration_seconds"),
            "Duration of the AQI enrichment pass in seconds"
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0])
    ).expect("Failed to create enrichment_duration_seconds metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(CATALOG_PROFILES.clone()));
    let _ = REGISTRY.register(Box::new(AQI_LOOKUPS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ENRICHMENT_DURATION_SECONDS.clone()));

    tracing::info!("Metrics system initialized successfully");
}

pub fn set_catalog_profiles(count: usize) {
    CATALOG_PROFILES.set(count as f64);
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record the outcome of an enrichment pass
pub fn record_enrichment(summary: &EnrichmentSummary, duration: Duration) {
    AQI_LOOKUPS_TOTAL
        .with_label_values(&["live"])
        .inc_by(summary.live as f64);
    AQI_LOOKUPS_TOTAL
        .with_label_values(&["failed"])
        .inc_by(summary.failed as f64);
    AQI_LOOKUPS_TOTAL
        .with_label_values(&["skipped"])
        .inc_by(summary.skipped as f64);

    ENRICHMENT_DURATION_SECONDS.observe(duration.as_secs_f64());
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_default();
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
