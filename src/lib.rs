//! IndiTravel Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod air_quality;
pub mod catalog;
pub mod config;
pub mod enrichment;
pub mod query;
pub mod selection;
pub mod server;
pub mod views;

// Re-export commonly used types for convenience
pub use air_quality::{AirQualitySource, OpenMeteoClient};
pub use catalog::{load_catalog, CatalogStore, ProfileRecord};
pub use enrichment::run_enrichment;
pub use server::{run_server, RequestsLoggingLevel};
