use crate::{dataset::DashboardDataset, index::IndexName, inputs::SliderInputs};
use serde::Deserialize;

/// On-disk layout of a dashboard YAML file.
#[derive(Debug, Deserialize)]
pub struct DashboardFile {
    pub schema_version: String,
    #[serde(default)]
    pub dataset: DashboardDataset,
    #[serde(default)]
    pub inputs: SliderInputs,
    pub selected_index: Option<IndexName>,
}
