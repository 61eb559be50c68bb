use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotKind {
    Air,
    Water,
    Noise,
    Disaster,
    Health,
}

/// A point of interest shown on the city map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: HotspotKind,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center_lat: 23.8103,
            center_lon: 90.4125,
            zoom: 12,
        }
    }
}

/// A filled circle ready to hand to a map layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius_m: f64,
    pub color: String,
    pub fill_opacity: f64,
    pub popup: String,
}

pub fn default_hotspots() -> Vec<Hotspot> {
    vec![
        Hotspot { lat: 23.82, lon: 90.41, kind: HotspotKind::Air, desc: "High Air Pollution".to_string() },
        Hotspot { lat: 23.81, lon: 90.42, kind: HotspotKind::Water, desc: "Contaminated Water".to_string() },
        Hotspot { lat: 23.815, lon: 90.41, kind: HotspotKind::Noise, desc: "Noise Level > 80dB".to_string() },
        Hotspot { lat: 23.805, lon: 90.425, kind: HotspotKind::Disaster, desc: "Flood Risk Zone".to_string() },
        Hotspot { lat: 23.818, lon: 90.405, kind: HotspotKind::Health, desc: "Hospital".to_string() },
    ]
}
