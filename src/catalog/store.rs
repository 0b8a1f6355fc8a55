use super::{CatalogError, EnrichmentStatus, ProfileRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Read-only holder of the working profile list.
///
/// Starts with the static catalog. The enrichment pass may replace the list
/// exactly once; readers always get a consistent snapshot, either the
/// static list or the fully enriched one.
#[derive(Debug)]
pub struct CatalogStore {
    profiles: RwLock<Arc<Vec<ProfileRecord>>>,
    loading: AtomicBool,
    enriched: AtomicBool,
}

impl CatalogStore {
    /// Store waiting for an enrichment pass to be published.
    pub fn pending(profiles: Vec<ProfileRecord>) -> Self {
        CatalogStore {
            profiles: RwLock::new(Arc::new(profiles)),
            loading: AtomicBool::new(true),
            enriched: AtomicBool::new(false),
        }
    }

    /// Store serving the static catalog as final data. Records still waiting
    /// for a lookup are marked `Static`.
    pub fn ready(mut profiles: Vec<ProfileRecord>) -> Self {
        for profile in profiles
            .iter_mut()
            .filter(|p| p.enrichment == EnrichmentStatus::Pending)
        {
            profile.enrichment = EnrichmentStatus::Static;
        }
        CatalogStore {
            profiles: RwLock::new(Arc::new(profiles)),
            loading: AtomicBool::new(false),
            enriched: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<ProfileRecord>> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, id: &str) -> Option<ProfileRecord> {
        self.snapshot().iter().find(|p| p.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.snapshot().iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True until the enrichment pass has settled.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Stops reporting `loading` without replacing any data.
    pub fn mark_ready(&self) {
        self.loading.store(false, Ordering::Release);
    }

    /// Replaces the working list with the enriched one.
    ///
    /// The new list must carry the same ids in the same order. Only the first
    /// publication is accepted.
    pub fn publish_enriched(&self, profiles: Vec<ProfileRecord>) -> Result<(), CatalogError> {
        let mut guard = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if self.enriched.load(Ordering::Acquire) {
            return Err(CatalogError::AlreadyEnriched);
        }
        if guard.len() != profiles.len() {
            return Err(CatalogError::EnrichmentMismatch(format!(
                "expected {} profiles, got {}",
                guard.len(),
                profiles.len()
            )));
        }
        if let Some((old, new)) = guard
            .iter()
            .zip(profiles.iter())
            .find(|(old, new)| old.id != new.id)
        {
            return Err(CatalogError::EnrichmentMismatch(format!(
                "expected id \"{}\", got \"{}\"",
                old.id, new.id
            )));
        }

        *guard = Arc::new(profiles);
        self.enriched.store(true, Ordering::Release);
        self.loading.store(false, Ordering::Release);
        info!("Published enriched catalog ({} profiles)", guard.len());
        Ok(())
    }
}
