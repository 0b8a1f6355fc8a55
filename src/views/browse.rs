use crate::catalog::{AqiLabel, ProfileRecord};
use crate::selection::SelectionController;
use serde::Serialize;

/// One card of the browse grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub image_url: String,
    pub aqi_value: u32,
    pub aqi_label: AqiLabel,
    pub aqi_is_realtime: bool,
    pub women_safety_score: f32,
    pub civic_sense_score: f32,
    pub selected: bool,
    /// False when the card can't be added because the selection is full.
    pub selectable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseView {
    pub profiles: Vec<ProfileCard>,
    pub selection_count: usize,
    pub selection_full: bool,
    pub loading: bool,
}

impl BrowseView {
    pub fn new(
        profiles: &[&ProfileRecord],
        selection: &SelectionController,
        loading: bool,
    ) -> Self {
        let full = selection.is_full();
        let profiles = profiles
            .iter()
            .map(|p| {
                let selected = selection.contains(&p.id);
                ProfileCard {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    tagline: p.tagline.clone(),
                    description: p.description.clone(),
                    image_url: p.image_url.clone(),
                    aqi_value: p.aqi.value,
                    aqi_label: p.aqi.label(),
                    aqi_is_realtime: p.aqi.is_realtime,
                    women_safety_score: p.women_safety_score,
                    civic_sense_score: p.civic_sense_score,
                    selected,
                    selectable: selected || !full,
                }
            })
            .collect();

        BrowseView {
            profiles,
            selection_count: selection.len(),
            selection_full: full,
            loading,
        }
    }
}
