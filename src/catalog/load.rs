//! Catalog loading and validation.

use super::{ProfileRecord, MAX_SCORE};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Profile at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate profile id \"{0}\"")]
    DuplicateId(String),

    #[error("Profile \"{id}\" has {field} = {value}, expected a value in [0, 10]")]
    ScoreOutOfRange {
        id: String,
        field: &'static str,
        value: f32,
    },

    #[error("Profile \"{id}\" has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { id: String, lat: f64, lng: f64 },

    #[error("Enriched list does not match the catalog ({0})")]
    EnrichmentMismatch(String),

    #[error("Catalog was already enriched")]
    AlreadyEnriched,
}

/// Checks the catalog invariants: unique non-empty ids, scores within
/// [0, 10], coordinates within the valid lat/lng ranges.
pub fn validate_profiles(profiles: &[ProfileRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (position, profile) in profiles.iter().enumerate() {
        if profile.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(position));
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(CatalogError::DuplicateId(profile.id.clone()));
        }
        for (field, value) in profile.scores() {
            if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
                return Err(CatalogError::ScoreOutOfRange {
                    id: profile.id.clone(),
                    field,
                    value,
                });
            }
        }
        if let Some(coords) = profile.coordinates {
            let valid = coords.lat.is_finite()
                && coords.lng.is_finite()
                && (-90.0..=90.0).contains(&coords.lat)
                && (-180.0..=180.0).contains(&coords.lng);
            if !valid {
                return Err(CatalogError::InvalidCoordinates {
                    id: profile.id.clone(),
                    lat: coords.lat,
                    lng: coords.lng,
                });
            }
        }
    }
    Ok(())
}

pub fn parse_catalog(json: &str) -> Result<Vec<ProfileRecord>, CatalogError> {
    let profiles: Vec<ProfileRecord> = serde_json::from_str(json)?;
    validate_profiles(&profiles)?;
    Ok(profiles)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileRecord>, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_owned(),
        source,
    })?;
    let profiles = parse_catalog(&json)?;

    let with_coordinates = profiles.iter().filter(|p| p.coordinates.is_some()).count();
    info!(
        "Catalog has:\n{} profiles\n{} with coordinates",
        profiles.len(),
        with_coordinates
    );
    Ok(profiles)
}
