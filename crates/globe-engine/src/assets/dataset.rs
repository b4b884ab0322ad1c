use serde::{Deserialize, Serialize};

/// Pre-loaded geographic collections for a globe scene.
/// The host delivers this as JSON over the bridge; beyond what serde
/// enforces, coordinates are taken as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobeDataset {
    /// Point coordinates as [lon, lat] pairs.
    #[serde(default)]
    pub points: Vec<[f32; 2]>,
    /// Arc coordinate sequences, each an ordered list of [lon, lat] pairs.
    #[serde(default)]
    pub arcs: Vec<Vec<[f32; 2]>>,
}

impl GlobeDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
