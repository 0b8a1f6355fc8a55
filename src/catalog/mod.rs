mod load;
mod models;
mod store;

pub use load::{load_catalog, parse_catalog, validate_profiles, CatalogError};
pub use models::*;
pub use store::CatalogStore;

/// Minimal valid profile for unit tests.
#[cfg(test)]
pub(crate) fn test_profile(id: &str, name: &str) -> ProfileRecord {
    ProfileRecord {
        id: id.to_string(),
        name: name.to_string(),
        capital: format!("{} City", name),
        description: format!("About {}.", name),
        tagline: format!("Visit {}", name),
        funny_stereotype: None,
        best_time_to_visit: "October to March".to_string(),
        image_url: format!("https://images.example/{}.jpg", id),
        coordinates: None,
        languages: vec!["Hindi".to_string(), "English".to_string()],
        safety_description: "Generally safe.".to_string(),
        civic_sense_description: "Reasonably clean.".to_string(),
        aqi: AirQuality::from_static(80),
        crime_status: CrimeStatus::Medium,
        hospitality_score: 7.0,
        infrastructure_score: 6.0,
        cultural_richness_score: 8.0,
        women_safety_score: 6.5,
        civic_sense_score: 6.0,
        activities: Vec::new(),
        enrichment: EnrichmentStatus::Pending,
    }
}
