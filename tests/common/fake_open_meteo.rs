//! In-process stand-in for the Open-Meteo air quality API
//!
//! Replies are scripted per latitude so each test profile can get a
//! different outcome. Unscripted latitudes get a 404.
#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub enum FakeReply {
    /// Full response with all five European sub-indices
    Reading { us_aqi: f64 },
    /// `current` object without `us_aqi`
    MissingIndex,
    /// Valid JSON that is not an air quality response
    Garbage,
    Status(u16),
}

#[derive(Clone)]
struct FakeState {
    replies: Arc<HashMap<i64, FakeReply>>,
    hits: Arc<AtomicUsize>,
}

pub struct FakeOpenMeteo {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

async fn air_quality(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let fields_ok = params
        .get("current")
        .map(|current| current.split(',').any(|field| field == "us_aqi"))
        .unwrap_or(false);
    if !fields_ok || params.get("timezone").map(String::as_str) != Some("auto") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let latitude = match params.get("latitude").and_then(|s| s.parse::<f64>().ok()) {
        Some(latitude) => latitude,
        None => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.replies.get(&(latitude as i64)) {
        Some(FakeReply::Reading { us_aqi }) => Json(json!({
            "latitude": latitude,
            "current": {
                "time": "2024-11-02T10:00",
                "us_aqi": us_aqi,
                "european_aqi_pm2_5": 20.0,
                "european_aqi_pm10": 12.0,
                "european_aqi_no2": 4.0,
                "european_aqi_o3": 31.0,
                "european_aqi_so2": 1.0
            }
        }))
        .into_response(),
        Some(FakeReply::MissingIndex) => Json(json!({
            "latitude": latitude,
            "current": { "time": "2024-11-02T10:00", "european_aqi_pm2_5": 20.0 }
        }))
        .into_response(),
        Some(FakeReply::Garbage) => Json(json!(["not", "an", "object"])).into_response(),
        Some(FakeReply::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

impl FakeOpenMeteo {
    /// Spawns the fake API on a random port.
    pub async fn spawn(replies: Vec<(f64, FakeReply)>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = FakeState {
            replies: Arc::new(
                replies
                    .into_iter()
                    .map(|(lat, reply)| (lat as i64, reply))
                    .collect(),
            ),
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/v1/air-quality", get(air_quality))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Fake Open-Meteo failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            hits,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Number of requests received so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FakeOpenMeteo {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
