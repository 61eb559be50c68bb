//! Two-column CSV reports and the GeoJSON map layer export.

use crate::{
    error::{MetroscapeError, Result},
    simulation::WasteOutcome,
    validation::latest_pair,
};
use csv::Writer;
use metroscape_schemas::{
    geo::CircleMarker,
    index::{IndexHistory, IndexName},
    inputs::WasteInputs,
};
use serde_json::json;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const INDEXES_CSV: &str = "current_indexes.csv";
pub const WASTE_CSV: &str = "waste_management_report.csv";
pub const MAP_GEOJSON: &str = "map_layers.geojson";

/// Writes `metric,value` rows for the latest reading of every index.
pub fn write_index_csv<W: io::Write>(out: W, history: &IndexHistory) -> Result<()> {
    let mut rows = vec![("metric".to_string(), "value".to_string())];
    for name in IndexName::ALL {
        let (actual, _) = latest_pair(name, history.get(name))?;
        rows.push((name.to_string(), actual.to_string()));
    }
    write_rows(out, INDEXES_CSV, &rows)
}

/// Writes the waste model snapshot followed by the inputs that produced it.
pub fn write_waste_csv<W: io::Write>(out: W, outcome: &WasteOutcome, inputs: &WasteInputs) -> Result<()> {
    let rows = vec![
        ("Metric".to_string(), "Value".to_string()),
        (
            "Total Monthly Waste (tons)".to_string(),
            format!("{:.2}", outcome.total_monthly_tons),
        ),
        (
            "Disposed to Landfill (tons)".to_string(),
            format!("{:.2}", outcome.disposed_to_landfill_tons),
        ),
        (
            "Total Diversion (%)".to_string(),
            format!("{:.2}", outcome.diversion_percent),
        ),
        (
            "Population Growth Rate (%)".to_string(),
            inputs.population_growth_pct.to_string(),
        ),
        (
            "Economic Activity Index".to_string(),
            inputs.economic_index.to_string(),
        ),
        (
            "Policy Effectiveness (%)".to_string(),
            inputs.policy_effectiveness_pct.to_string(),
        ),
        (
            "Landfill Cost ($/ton)".to_string(),
            inputs.landfill_cost_usd_per_ton.to_string(),
        ),
    ];
    write_rows(out, WASTE_CSV, &rows)
}

fn write_rows<W: io::Write>(out: W, label: &str, rows: &[(String, String)]) -> Result<()> {
    let csv_err = |e| MetroscapeError::CsvError(label.to_string(), e);
    let mut writer = Writer::from_writer(out);
    for (metric, value) in rows {
        writer.write_record([metric, value]).map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|e| MetroscapeError::FileIO(label.to_string(), e))?;
    Ok(())
}

/// Opens `dir/file_name` for writing and hands it to `write`.
pub fn export_to_file<F>(dir: &Path, file_name: &str, write: F) -> Result<PathBuf>
where
    F: FnOnce(fs::File) -> Result<()>,
{
    let path = dir.join(file_name);
    let file = fs::File::create(&path)
        .map_err(|e| MetroscapeError::FileIO(path.display().to_string(), e))?;
    write(file)?;
    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}

/// GeoJSON feature collection with one point feature per circle marker.
pub fn markers_geojson(layers: &[(&str, &[CircleMarker])]) -> serde_json::Value {
    let features: Vec<serde_json::Value> = layers
        .iter()
        .flat_map(|(layer, markers)| {
            markers.iter().map(move |m| {
                json!({
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [m.lon, m.lat] },
                    "properties": {
                        "layer": layer,
                        "radius_m": m.radius_m,
                        "color": m.color,
                        "fill_opacity": m.fill_opacity,
                        "popup": m.popup,
                    }
                })
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

pub fn write_geojson<W: io::Write>(out: W, layers: &[(&str, &[CircleMarker])]) -> Result<()> {
    serde_json::to_writer_pretty(out, &markers_geojson(layers))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{simulation::simulate_waste, validation::Validation};
    use metroscape_schemas::{geo::default_hotspots, waste::WasteModelConstants};

    #[test]
    fn index_csv_lists_latest_readings() {
        let mut buf = Vec::new();
        write_index_csv(&mut buf, &IndexHistory::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "metric,value\nair,6.5\nwater,5.2\nnoise,3.8\nhuman,58.5\n");
    }

    #[test]
    fn waste_csv_has_metrics_then_inputs() {
        let inputs = WasteInputs {
            population_growth_pct: 0.0,
            economic_index: 1.0,
            policy_effectiveness_pct: 50,
            landfill_cost_usd_per_ton: 0,
        };
        let outcome = simulate_waste(&WasteModelConstants::default(), inputs, Validation::Lenient).unwrap();
        let mut buf = Vec::new();
        write_waste_csv(&mut buf, &outcome, &inputs).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Metric,Value");
        assert_eq!(lines[1], "Total Monthly Waste (tons),12000.00");
        assert_eq!(lines[2], "Disposed to Landfill (tons),8400.00");
        assert_eq!(lines[3], "Total Diversion (%),35.00");
        assert_eq!(lines[6], "Policy Effectiveness (%),50");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn geojson_uses_lon_lat_order() {
        let markers = crate::geo::hotspot_markers(&default_hotspots());
        let value = markers_geojson(&[("hotspots", markers.as_slice())]);
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 5);
        assert_eq!(features[0]["geometry"]["coordinates"][0], 90.41);
        assert_eq!(features[0]["properties"]["layer"], "hotspots");
    }
}
