//! Search and ordering of the browse list.

use crate::catalog::ProfileRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Display name, A to Z.
    #[default]
    Name,
    /// Lowest AQI first.
    Aqi,
    /// Highest women's safety score first.
    Safety,
    /// Highest cultural richness first.
    Culture,
    /// Highest infrastructure score first.
    Infrastructure,
}

impl SortKey {
    pub fn compare(&self, a: &ProfileRecord, b: &ProfileRecord) -> Ordering {
        match self {
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::Aqi => a.aqi.value.cmp(&b.aqi.value),
            SortKey::Safety => b.women_safety_score.total_cmp(&a.women_safety_score),
            SortKey::Culture => b
                .cultural_richness_score
                .total_cmp(&a.cultural_richness_score),
            SortKey::Infrastructure => b.infrastructure_score.total_cmp(&a.infrastructure_score),
        }
    }
}

/// Case-insensitive substring match on name or tagline. Only the empty term
/// matches everything, whitespace is matched literally.
pub fn matches_term(profile: &ProfileRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    profile.name.to_lowercase().contains(&term) || profile.tagline.to_lowercase().contains(&term)
}

/// Filters by `term` and orders by `key`. Ties keep catalog order.
pub fn filter_and_sort<'a>(
    profiles: &'a [ProfileRecord],
    term: &str,
    key: SortKey,
) -> Vec<&'a ProfileRecord> {
    let mut result: Vec<&ProfileRecord> = profiles
        .iter()
        .filter(|profile| matches_term(profile, term))
        .collect();
    // sort_by is stable
    result.sort_by(|a, b| key.compare(a, b));
    result
}
