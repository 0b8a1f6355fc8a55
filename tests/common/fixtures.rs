//! Test fixture creation for the profile catalog

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Five profiles, four of them with coordinates. Scores and AQI values are
/// documented in constants.rs.
pub const TEST_CATALOG_JSON: &str = r#"[
  {
    "id": "KL", "name": "Kerala", "capital": "Thiruvananthapuram",
    "description": "Backwaters and spice hills.", "tagline": "God's Own Country",
    "funnyStereotype": "Strikes and tea.",
    "bestTimeToVisit": "September to March", "imageUrl": "https://img.test/kl.jpg",
    "coordinates": { "lat": 10.0, "lng": 76.25 },
    "languages": ["Malayalam", "English"],
    "safetyDescription": "Very safe.", "civicSenseDescription": "Clean.",
    "aqi": { "value": 40 }, "crimeStatus": "Low",
    "hospitalityScore": 9.0, "infrastructureScore": 7.5, "culturalRichnessScore": 8.5,
    "womenSafetyScore": 9.0, "civicSenseScore": 8.5,
    "activities": [
      { "name": "Houseboat", "city": "Alappuzha", "type": "Nature",
        "shortDescription": "Backwater cruise.", "suggestedDuration": "1 day" }
    ]
  },
  {
    "id": "RJ", "name": "Rajasthan", "capital": "Jaipur",
    "description": "Forts and deserts.", "tagline": "The Land of Kings",
    "bestTimeToVisit": "October to March", "imageUrl": "https://img.test/rj.jpg",
    "coordinates": { "lat": 27.0, "lng": 74.2 },
    "languages": ["Hindi", "Rajasthani"],
    "safetyDescription": "Touts near monuments.", "civicSenseDescription": "Crowded lanes.",
    "aqi": { "value": 120, "label": "Good" }, "crimeStatus": "Medium",
    "hospitalityScore": 9.5, "infrastructureScore": 7.0, "culturalRichnessScore": 10.0,
    "womenSafetyScore": 6.0, "civicSenseScore": 6.0
  },
  {
    "id": "TN", "name": "Tamil Nadu", "capital": "Chennai",
    "description": "Temple towns.", "tagline": "Enchanting Tamil Nadu",
    "bestTimeToVisit": "November to February", "imageUrl": "https://img.test/tn.jpg",
    "coordinates": { "lat": 11.0, "lng": 78.6 },
    "languages": ["Tamil", "English"],
    "safetyDescription": "Safe.", "civicSenseDescription": "Dense traffic.",
    "aqi": { "value": 74 }, "crimeStatus": "Low",
    "hospitalityScore": 8.0, "infrastructureScore": 8.5, "culturalRichnessScore": 9.5,
    "womenSafetyScore": 8.0, "civicSenseScore": 7.5
  },
  {
    "id": "GA", "name": "Goa", "capital": "Panaji",
    "description": "Beaches and churches.", "tagline": "Sun, sand and susegad",
    "bestTimeToVisit": "November to February", "imageUrl": "https://img.test/ga.jpg",
    "coordinates": { "lat": 15.0, "lng": 74.1 },
    "languages": ["Konkani", "English"],
    "safetyDescription": "Mostly safe.", "civicSenseDescription": "Littered in season.",
    "aqi": { "value": 58 }, "crimeStatus": "Low",
    "hospitalityScore": 8.5, "infrastructureScore": 8.0, "culturalRichnessScore": 7.5,
    "womenSafetyScore": 7.5, "civicSenseScore": 7.0
  },
  {
    "id": "LA", "name": "Ladakh", "capital": "Leh",
    "description": "High desert and monasteries.", "tagline": "Land of High Passes",
    "bestTimeToVisit": "June to September", "imageUrl": "https://img.test/la.jpg",
    "languages": ["Ladakhi", "Hindi"],
    "safetyDescription": "Very safe.", "civicSenseDescription": "Pristine.",
    "aqi": { "value": 30 }, "crimeStatus": "Low",
    "hospitalityScore": 8.0, "infrastructureScore": 5.0, "culturalRichnessScore": 8.0,
    "womenSafetyScore": 8.5, "civicSenseScore": 8.0
  }
]"#;

/// Writes the test catalog to a temporary directory.
/// Returns (temp_dir, catalog_path)
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let catalog_path = dir.path().join("states.json");
    fs::write(&catalog_path, TEST_CATALOG_JSON)?;
    Ok((dir, catalog_path))
}
