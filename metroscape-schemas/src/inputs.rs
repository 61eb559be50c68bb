use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructureCategory {
    Residential,
    Commercial,
    Transport,
}

impl InfrastructureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfrastructureCategory::Residential => "residential",
            InfrastructureCategory::Commercial => "commercial",
            InfrastructureCategory::Transport => "transport",
        }
    }
}

impl fmt::Display for InfrastructureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live control values. Re-read on every recompute, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderInputs {
    pub temperature_anomaly_c: f64,
    pub rainfall_increase_pct: i32,
    pub infrastructure: InfrastructureCategory,
    pub traffic_density_pct: u32,
    pub ev_adoption_pct: u32,
    pub population_growth_pct: f64,
    pub economic_index: f64,
    pub policy_effectiveness_pct: u32,
    pub landfill_cost_usd_per_ton: u32,
}

impl Default for SliderInputs {
    fn default() -> Self {
        Self {
            temperature_anomaly_c: 1.5,
            rainfall_increase_pct: 10,
            infrastructure: InfrastructureCategory::Residential,
            traffic_density_pct: 50,
            ev_adoption_pct: 20,
            population_growth_pct: 0.0,
            economic_index: 1.0,
            policy_effectiveness_pct: 50,
            landfill_cost_usd_per_ton: 0,
        }
    }
}

/// The subset of inputs consumed by the waste stream model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteInputs {
    pub population_growth_pct: f64,
    pub economic_index: f64,
    pub policy_effectiveness_pct: u32,
    pub landfill_cost_usd_per_ton: u32,
}

impl From<&SliderInputs> for WasteInputs {
    fn from(inputs: &SliderInputs) -> Self {
        Self {
            population_growth_pct: inputs.population_growth_pct,
            economic_index: inputs.economic_index,
            policy_effectiveness_pct: inputs.policy_effectiveness_pct,
            landfill_cost_usd_per_ton: inputs.landfill_cost_usd_per_ton,
        }
    }
}
