//! HTTP client for end-to-end tests
//!
//! This module wraps reqwest and provides methods for all server endpoints.
//!
//! When API routes or request formats change, update only this file.
#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Reads a successful response as JSON, panicking on anything else
    pub async fn json(response: Response) -> Value {
        assert!(
            response.status().is_success(),
            "Unexpected status {}",
            response.status()
        );
        response.json().await.expect("Response is not JSON")
    }

    // ========================================================================
    // Home
    // ========================================================================

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    /// GET /v1/profiles
    pub async fn browse(&self) -> Response {
        self.get("/v1/profiles").await
    }

    /// GET /v1/profiles?q=..&sort=..
    pub async fn browse_with(&self, query: &str, sort: &str) -> Response {
        self.client
            .get(format!("{}/v1/profiles", self.base_url))
            .query(&[("q", query), ("sort", sort)])
            .send()
            .await
            .expect("Browse request failed")
    }

    /// Ids of the browse cards, in display order
    pub async fn browse_ids(&self, query: &str, sort: &str) -> Vec<String> {
        let body = Self::json(self.browse_with(query, sort).await).await;
        body["profiles"]
            .as_array()
            .expect("profiles is not an array")
            .iter()
            .map(|card| card["id"].as_str().unwrap().to_string())
            .collect()
    }

    /// GET /v1/profiles/{id}
    pub async fn get_profile(&self, id: &str) -> Response {
        self.get(&format!("/v1/profiles/{}", id)).await
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// GET /v1/selection
    pub async fn get_selection(&self) -> Response {
        self.get("/v1/selection").await
    }

    /// POST /v1/selection/{id}
    pub async fn toggle(&self, id: &str) -> Response {
        self.client
            .post(format!("{}/v1/selection/{}", self.base_url, id))
            .send()
            .await
            .expect("Toggle request failed")
    }

    /// DELETE /v1/selection/{id}
    pub async fn remove(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/v1/selection/{}", self.base_url, id))
            .send()
            .await
            .expect("Remove request failed")
    }

    /// DELETE /v1/selection
    pub async fn clear(&self) -> Response {
        self.client
            .delete(format!("{}/v1/selection", self.base_url))
            .send()
            .await
            .expect("Clear request failed")
    }

    /// Selected ids, in selection order
    pub async fn selection_ids(&self) -> Vec<String> {
        let body = Self::json(self.get_selection().await).await;
        body["ids"]
            .as_array()
            .expect("ids is not an array")
            .iter()
            .map(|id| id.as_str().unwrap().to_string())
            .collect()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// GET /v1/compare
    pub async fn compare(&self) -> Response {
        self.get("/v1/compare").await
    }
}
