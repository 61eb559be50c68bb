use crate::{
    error::{MetroscapeError, Result},
    validation::{latest, latest_pair},
};
use metroscape_schemas::{
    dataset::DashboardDataset,
    file_formats::DashboardFile,
    index::IndexName,
    inputs::SliderInputs,
};
use std::{fs, path::Path};

pub const SCHEMA_VERSION: &str = "1.0";

/// A validated dashboard definition: static data plus the starting control values.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    pub dataset: DashboardDataset,
    pub inputs: SliderInputs,
    pub selected_index: Option<IndexName>,
}

pub fn load_dashboard_file(path: &Path) -> Result<DashboardConfig> {
    let label = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| MetroscapeError::FileIO(label.clone(), e))?;
    parse_dashboard_yaml(&label, &content)
}

pub fn parse_dashboard_yaml(label: &str, content: &str) -> Result<DashboardConfig> {
    let file: DashboardFile =
        serde_yaml::from_str(content).map_err(|e| MetroscapeError::YamlParsing(label.to_string(), e))?;
    if file.schema_version != SCHEMA_VERSION {
        tracing::warn!(
            found = %file.schema_version,
            expected = SCHEMA_VERSION,
            "unexpected dashboard schema version"
        );
    }
    validate_dataset(&file.dataset)?;

    Ok(DashboardConfig {
        dataset: file.dataset,
        inputs: file.inputs,
        selected_index: file.selected_index,
    })
}

/// Every series the models read must be non-empty, and each index must pair up with its ideal.
pub fn validate_dataset(dataset: &DashboardDataset) -> Result<()> {
    for name in IndexName::ALL {
        latest_pair(name, dataset.indices.get(name))?;
    }
    latest("ndvi", &dataset.ndvi)?;
    latest("water_reservoir", &dataset.water_reservoir)?;
    latest("mobility_baseline", &dataset.mobility_baseline)?;
    if dataset.months.is_empty() {
        return Err(MetroscapeError::EmptySeries("months".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metroscape_schemas::inputs::InfrastructureCategory;

    #[test]
    fn minimal_file_falls_back_to_sample_data() {
        let config = parse_dashboard_yaml("inline", "schema_version: \"1.0\"\n").unwrap();
        assert_eq!(config.dataset, DashboardDataset::default());
        assert_eq!(config.inputs, SliderInputs::default());
        assert_eq!(config.selected_index, None);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let yaml = r#"
schema_version: "1.0"
selected_index: human
inputs:
  temperature_anomaly_c: 3.5
  infrastructure: transport
dataset:
  ndvi: [0.6, 0.7]
"#;
        let config = parse_dashboard_yaml("inline", yaml).unwrap();
        assert_eq!(config.inputs.temperature_anomaly_c, 3.5);
        assert_eq!(config.inputs.infrastructure, InfrastructureCategory::Transport);
        assert_eq!(config.inputs.traffic_density_pct, 50);
        assert_eq!(config.dataset.ndvi, vec![0.6, 0.7]);
        assert_eq!(config.dataset.water_reservoir.len(), 7);
        assert_eq!(config.selected_index, Some(IndexName::Human));
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let yaml = "schema_version: \"1.0\"\ninputs:\n  infrastructure: industrial\n";
        assert!(matches!(
            parse_dashboard_yaml("inline", yaml),
            Err(MetroscapeError::YamlParsing(..))
        ));
    }

    #[test]
    fn empty_series_is_rejected_at_load() {
        let yaml = "schema_version: \"1.0\"\ndataset:\n  water_reservoir: []\n";
        assert!(matches!(
            parse_dashboard_yaml("inline", yaml),
            Err(MetroscapeError::EmptySeries(name)) if name == "water_reservoir"
        ));
    }
}
