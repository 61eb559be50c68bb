use crate::{
    geo::{default_hotspots, Hotspot, MapView},
    index::IndexHistory,
    waste::WasteModelConstants,
};
use serde::{Deserialize, Serialize};

/// All static data behind the dashboard. Immutable for a session.
///
/// Every field has a default taken from the sample city, so a YAML file only
/// needs to carry the parts it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardDataset {
    pub months: Vec<String>,
    pub indices: IndexHistory,
    /// Green cover fraction, 0-1.
    pub ndvi: Vec<f64>,
    /// Reservoir level in percent.
    pub water_reservoir: Vec<f64>,
    /// Air quality history (µg/m³); the last point is overwritten by the mobility model.
    pub mobility_baseline: Vec<f64>,
    pub hotspots: Vec<Hotspot>,
    pub map: MapView,
    pub waste: WasteModelConstants,
}

impl Default for DashboardDataset {
    fn default() -> Self {
        Self {
            months: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            indices: IndexHistory::default(),
            ndvi: vec![0.45, 0.47, 0.44, 0.5, 0.52, 0.48, 0.55],
            water_reservoir: vec![85.0, 82.0, 80.0, 78.0, 75.0, 72.0, 70.0],
            mobility_baseline: vec![120.0, 115.0, 110.0, 105.0, 100.0, 95.0, 90.0],
            hotspots: default_hotspots(),
            map: MapView::default(),
            waste: WasteModelConstants::default(),
        }
    }
}
