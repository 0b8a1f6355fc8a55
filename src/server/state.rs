use axum::extract::FromRef;

use crate::catalog::CatalogStore;
use crate::selection::SelectionController;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalogStore = Arc<CatalogStore>;
pub type GuardedSelection = Arc<Mutex<SelectionController>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog_store: GuardedCatalogStore,
    /// Single compare set shared by the browse and comparison views.
    pub selection: GuardedSelection,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog_store: GuardedCatalogStore) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog_store,
            selection: Arc::new(Mutex::new(SelectionController::new())),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogStore {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog_store.clone()
    }
}

impl FromRef<ServerState> for GuardedSelection {
    fn from_ref(input: &ServerState) -> Self {
        input.selection.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
