use anyhow::{Context, Result};
use std::{
    sync::{MutexGuard, PoisonError},
    time::Duration,
};

use tracing::{error, info};

use crate::catalog::ProfileRecord;
use crate::query::{filter_and_sort, SortKey};
use crate::selection::{SelectionController, ToggleOutcome, MAX_SELECTION};
use crate::views::{BrowseView, ComparisonView, DetailView};
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::metrics::metrics_handler;
use super::{http_cache, log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub profiles: usize,
    pub loading: bool,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct BrowseParams {
    pub q: String,
    pub sort: SortKey,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SelectionState {
    pub ids: Vec<String>,
    pub count: usize,
    pub full: bool,
    pub max: usize,
}

impl SelectionState {
    fn of(selection: &SelectionController) -> Self {
        SelectionState {
            ids: selection.ids().to_vec(),
            count: selection.len(),
            full: selection.is_full(),
            max: MAX_SELECTION,
        }
    }
}

#[derive(Serialize, Debug)]
struct ToggleResponse {
    pub outcome: ToggleOutcome,
    pub selection: SelectionState,
}

fn lock_selection(selection: &GuardedSelection) -> MutexGuard<'_, SelectionController> {
    selection.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        profiles: state.catalog_store.len(),
        loading: state.catalog_store.is_loading(),
    };
    Json(stats)
}

async fn list_profiles(
    State(state): State<ServerState>,
    Query(params): Query<BrowseParams>,
) -> Response {
    let snapshot = state.catalog_store.snapshot();
    let profiles = filter_and_sort(&snapshot, &params.q, params.sort);
    let selection = lock_selection(&state.selection);
    Json(BrowseView::new(
        &profiles,
        &selection,
        state.catalog_store.is_loading(),
    ))
    .into_response()
}

async fn get_profile(
    State(catalog_store): State<GuardedCatalogStore>,
    Path(id): Path<String>,
) -> Response {
    match catalog_store.get(&id) {
        Some(profile) => Json(DetailView::new(profile, catalog_store.is_loading())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_selection(State(selection): State<GuardedSelection>) -> Response {
    Json(SelectionState::of(&lock_selection(&selection))).into_response()
}

async fn toggle_selection(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    if !state.catalog_store.contains(&id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut selection = lock_selection(&state.selection);
    let outcome = selection.toggle(&id);
    if outcome == ToggleOutcome::Rejected {
        info!("Selection full, not adding {}", id);
    }
    Json(ToggleResponse {
        outcome,
        selection: SelectionState::of(&selection),
    })
    .into_response()
}

async fn remove_from_selection(
    State(selection): State<GuardedSelection>,
    Path(id): Path<String>,
) -> Response {
    let mut selection = lock_selection(&selection);
    selection.remove(&id);
    Json(SelectionState::of(&selection)).into_response()
}

async fn clear_selection(State(selection): State<GuardedSelection>) -> Response {
    let mut selection = lock_selection(&selection);
    selection.clear();
    Json(SelectionState::of(&selection)).into_response()
}

async fn get_comparison(State(state): State<ServerState>) -> Response {
    let ids = lock_selection(&state.selection).ids().to_vec();
    let snapshot = state.catalog_store.snapshot();
    let selected: Vec<ProfileRecord> = ids
        .iter()
        .filter_map(|id| snapshot.iter().find(|p| &p.id == id).cloned())
        .collect();
    Json(ComparisonView::assemble(
        &selected,
        state.catalog_store.is_loading(),
    ))
    .into_response()
}

pub fn make_app(config: ServerConfig, catalog_store: GuardedCatalogStore) -> Result<Router> {
    let state = ServerState::new(config.clone(), catalog_store);

    let profile_routes: Router = Router::new()
        .route("/profiles", get(list_profiles))
        .route("/profiles/{id}", get(get_profile))
        .layer(middleware::from_fn_with_state(state.clone(), http_cache))
        .with_state(state.clone());

    let selection_routes: Router = Router::new()
        .route("/selection", get(get_selection).delete(clear_selection))
        .route(
            "/selection/{id}",
            post(toggle_selection).delete(remove_from_selection),
        )
        .route("/compare", get(get_comparison))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router
        .nest("/v1", profile_routes.merge(selection_routes))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(catalog_store: GuardedCatalogStore, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let metrics_port = config.metrics_port;
    let app = make_app(config, catalog_store)?;

    let metrics_app = Router::new().route("/metrics", get(metrics_handler));
    let metrics_listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port))
        .await
        .with_context(|| format!("Failed to bind metrics port {}", metrics_port))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server stopped: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    Ok(axum::serve(listener, app).await?)
}
