//! Shared constants for end-to-end tests
//!
//! When the test catalog changes, update only this file and fixtures.rs.
#![allow(dead_code)]

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// "Kerala", safety 9, AQI 40, located at latitude 10
pub const KERALA_ID: &str = "KL";

/// "Rajasthan", safety 6, AQI 120, located at latitude 27
pub const RAJASTHAN_ID: &str = "RJ";

/// "Tamil Nadu", safety 8, AQI 74, located at latitude 11
pub const TAMIL_NADU_ID: &str = "TN";

/// "Goa", safety 7.5, AQI 58, located at latitude 15
pub const GOA_ID: &str = "GA";

/// "Ladakh", no coordinates, AQI 30
pub const LADAKH_ID: &str = "LA";

/// Not in the catalog
pub const UNKNOWN_ID: &str = "ZZ";

/// Catalog order
pub const ALL_IDS: [&str; 5] = [KERALA_ID, RAJASTHAN_ID, TAMIL_NADU_ID, GOA_ID, LADAKH_ID];

pub const KERALA_LAT: f64 = 10.0;
pub const RAJASTHAN_LAT: f64 = 27.0;
pub const TAMIL_NADU_LAT: f64 = 11.0;
pub const GOA_LAT: f64 = 15.0;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Polling interval when waiting for server readiness (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Maximum time to wait for the enrichment pass to be published (milliseconds)
pub const ENRICHMENT_TIMEOUT_MS: u64 = 5000;

/// Request timeout for test client (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
