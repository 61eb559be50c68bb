//! Map layer data: hotspot markers and the NDVI overlay.
//!
//! Only marker geometry and styling are computed here; drawing tiles is left
//! to whatever map widget consumes the markers.

use crate::error::{MetroscapeError, Result};
use metroscape_schemas::geo::{CircleMarker, Hotspot, HotspotKind};

const HOTSPOT_RADIUS_M: f64 = 400.0;
const HOTSPOT_OPACITY: f64 = 0.5;
const OVERLAY_RADIUS_M: f64 = 600.0;
const OVERLAY_OPACITY: f64 = 0.35;
const OVERLAY_OFFSET_DEG: f64 = 0.002;

pub fn hotspot_color(kind: HotspotKind) -> &'static str {
    match kind {
        HotspotKind::Air => "red",
        HotspotKind::Water => "blue",
        HotspotKind::Noise => "orange",
        HotspotKind::Disaster => "purple",
        HotspotKind::Health => "green",
    }
}

pub fn ndvi_color(ndvi: f64) -> &'static str {
    if ndvi > 0.5 {
        "#2ca02c"
    } else if ndvi > 0.45 {
        "#66c2a4"
    } else {
        "#ffcc00"
    }
}

pub fn hotspot_markers(hotspots: &[Hotspot]) -> Vec<CircleMarker> {
    hotspots
        .iter()
        .map(|h| CircleMarker {
            lat: h.lat,
            lon: h.lon,
            radius_m: HOTSPOT_RADIUS_M,
            color: hotspot_color(h.kind).to_string(),
            fill_opacity: HOTSPOT_OPACITY,
            popup: h.desc.clone(),
        })
        .collect()
}

/// One vegetation circle per hotspot, nudged off the hotspot and sized by NDVI.
///
/// NDVI samples are reused cyclically when there are more hotspots than samples.
pub fn ndvi_overlay(hotspots: &[Hotspot], ndvi: &[f64]) -> Result<Vec<CircleMarker>> {
    if ndvi.is_empty() {
        return Err(MetroscapeError::EmptySeries("ndvi".to_string()));
    }

    Ok(hotspots
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let value = ndvi[i % ndvi.len()];
            let lat_sign = if i % 2 == 1 { 1.0 } else { -1.0 };
            let lon_step = (i % 3) as f64 - 1.0;
            CircleMarker {
                lat: h.lat + OVERLAY_OFFSET_DEG * lat_sign,
                lon: h.lon + OVERLAY_OFFSET_DEG * lon_step,
                radius_m: OVERLAY_RADIUS_M * value,
                color: ndvi_color(value).to_string(),
                fill_opacity: OVERLAY_OPACITY,
                popup: format!("NDVI {value:.2}"),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metroscape_schemas::geo::default_hotspots;

    #[test]
    fn markers_follow_hotspot_kind() {
        let markers = hotspot_markers(&default_hotspots());
        let colors: Vec<&str> = markers.iter().map(|m| m.color.as_str()).collect();
        assert_eq!(colors, ["red", "blue", "orange", "purple", "green"]);
        assert!(markers.iter().all(|m| m.radius_m == 400.0));
    }

    #[test]
    fn overlay_offsets_and_colors() {
        let hotspots = default_hotspots();
        let overlay = ndvi_overlay(&hotspots, &[0.45, 0.47, 0.44, 0.5, 0.52]).unwrap();
        assert_eq!(overlay.len(), 5);

        // i = 0: lat - 0.002, lon - 0.002
        assert!((overlay[0].lat - (23.82 - 0.002)).abs() < 1e-12);
        assert!((overlay[0].lon - (90.41 - 0.002)).abs() < 1e-12);
        // i = 1: lat + 0.002, lon unchanged
        assert!((overlay[1].lat - (23.81 + 0.002)).abs() < 1e-12);
        assert!((overlay[1].lon - 90.42).abs() < 1e-12);

        assert_eq!(overlay[0].color, "#ffcc00");
        assert_eq!(overlay[1].color, "#66c2a4");
        assert_eq!(overlay[4].color, "#2ca02c");
        assert_eq!(overlay[1].popup, "NDVI 0.47");
        assert!((overlay[0].radius_m - 270.0).abs() < 1e-9);
    }

    #[test]
    fn overlay_cycles_short_ndvi_series() {
        let overlay = ndvi_overlay(&default_hotspots(), &[0.6]).unwrap();
        assert!(overlay.iter().all(|m| m.color == "#2ca02c"));
        assert!(ndvi_overlay(&default_hotspots(), &[]).is_err());
    }
}
