//! HTTP caching middleware

use super::super::state::ServerState;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Marks profile responses cacheable for `content_cache_age_sec`, unless the
/// catalog may still change because enrichment is running.
pub async fn http_cache(
    State(state): State<ServerState>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let response = next.run(request).await.into_response();

    let value = if state.catalog_store.is_loading() {
        HeaderValue::from_static("no-store")
    } else {
        match HeaderValue::from_str(&format!("max-age={}", state.config.content_cache_age_sec)) {
            Ok(value) => value,
            Err(_) => return response,
        }
    };

    let (mut parts, body) = response.into_parts();
    parts.headers.insert(header::CACHE_CONTROL, value);

    Response::from_parts(parts, body)
}
