//! One-shot live AQI enrichment of the catalog.
//!
//! Every profile with coordinates gets exactly one lookup, each in its own
//! task. The pass completes only once all lookups have settled, failures are
//! contained to their own profile and fall back to the catalog data.

use crate::air_quality::{AirQualityError, AirQualityReading, AirQualitySource};
use crate::catalog::{AirQuality, CatalogStore, EnrichmentStatus, ProfileRecord};
use crate::server::metrics;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub live: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Overlays a live reading on an AQI sub-record.
///
/// The value becomes the rounded index. The pollutant breakdown is replaced
/// only when the reading carries all five sub-indices.
pub fn apply_reading(aqi: &mut AirQuality, reading: &AirQualityReading) {
    aqi.value = reading.us_aqi.round() as u32;
    aqi.is_realtime = true;
    if let Some(european) = reading.european {
        aqi.european_aqi = Some(european);
    }
}

enum LookupOutcome {
    Skipped,
    Settled(Result<Result<AirQualityReading, AirQualityError>, JoinError>),
}

/// Runs the lookups and returns the merged list, same length, same order.
pub async fn enrich_profiles(
    source: Arc<dyn AirQualitySource>,
    profiles: Vec<ProfileRecord>,
) -> (Vec<ProfileRecord>, EnrichmentSummary) {
    let handles: Vec<_> = profiles
        .iter()
        .map(|profile| {
            profile.coordinates.map(|coordinates| {
                let source = source.clone();
                tokio::spawn(async move { source.current(coordinates).await })
            })
        })
        .collect();

    let outcomes = join_all(handles.into_iter().map(|handle| async move {
        match handle {
            Some(handle) => LookupOutcome::Settled(handle.await),
            None => LookupOutcome::Skipped,
        }
    }))
    .await;

    let mut summary = EnrichmentSummary::default();
    let enriched = profiles
        .into_iter()
        .zip(outcomes)
        .map(|(mut profile, outcome)| {
            match outcome {
                LookupOutcome::Skipped => {
                    profile.enrichment = EnrichmentStatus::NoCoordinates;
                    summary.skipped += 1;
                }
                LookupOutcome::Settled(Ok(Ok(reading))) => {
                    apply_reading(&mut profile.aqi, &reading);
                    profile.enrichment = EnrichmentStatus::Live;
                    debug!(
                        "Live AQI for {}: {} ({})",
                        profile.name,
                        profile.aqi.value,
                        profile.aqi.label()
                    );
                    summary.live += 1;
                }
                LookupOutcome::Settled(Ok(Err(err))) => {
                    warn!("AQI fetch failed for {}: {}", profile.name, err);
                    profile.enrichment = EnrichmentStatus::Failed;
                    summary.failed += 1;
                }
                LookupOutcome::Settled(Err(join_err)) => {
                    warn!("AQI lookup task for {} did not finish: {}", profile.name, join_err);
                    profile.enrichment = EnrichmentStatus::Failed;
                    summary.failed += 1;
                }
            }
            profile
        })
        .collect();

    (enriched, summary)
}

/// Enriches the store's current list and publishes the result.
pub async fn run_enrichment(
    store: Arc<CatalogStore>,
    source: Arc<dyn AirQualitySource>,
) -> EnrichmentSummary {
    let start = Instant::now();
    let profiles = store.snapshot().as_ref().clone();
    info!("Fetching live AQI for {} profiles...", profiles.len());

    let (enriched, summary) = enrich_profiles(source, profiles).await;
    metrics::record_enrichment(&summary, start.elapsed());

    if let Err(err) = store.publish_enriched(enriched) {
        error!("Could not publish enriched catalog: {}", err);
        store.mark_ready();
    }

    info!(
        "AQI enrichment done in {}ms: {} live, {} failed, {} without coordinates",
        start.elapsed().as_millis(),
        summary.live,
        summary.failed,
        summary.skipped
    );
    summary
}
