use anyhow::{Context, Result};
use clap::Args;
use metroscape_core::{
    analysis::{climate::parse_category, index::parse_index_name},
    config::{self as core_config, DashboardConfig, SCHEMA_VERSION},
    dashboard::Dashboard,
};
use metroscape_schemas::{dataset::DashboardDataset, index::IndexName, inputs::SliderInputs};
use serde::Serialize;
use std::path::Path;

/// Loaded when no `--config` is given and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "data/dashboard.yaml";

/// Control values that override the dashboard file.
#[derive(Debug, Default, Clone, Args)]
pub struct SliderArgs {
    /// Temperature anomaly in °C.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub temp: Option<f64>,
    /// Rainfall increase in percent.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub rainfall: Option<i32>,
    /// Infrastructure category: residential, commercial or transport.
    #[arg(long, global = true)]
    pub infra: Option<String>,
    /// Traffic density in percent.
    #[arg(long, global = true)]
    pub traffic: Option<u32>,
    /// EV adoption in percent.
    #[arg(long, global = true)]
    pub ev: Option<u32>,
    /// Population growth in percent.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub pop_growth: Option<f64>,
    /// Economic activity multiplier.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub economic_index: Option<f64>,
    /// Recycling policy effectiveness in percent.
    #[arg(long, global = true)]
    pub policy: Option<u32>,
    /// Landfill cost in $/ton.
    #[arg(long, global = true)]
    pub landfill_cost: Option<u32>,
    /// Index shown in the insights chart: air, water, noise or human.
    #[arg(long, global = true)]
    pub index: Option<String>,
}

impl SliderArgs {
    pub fn apply(&self, config: &mut DashboardConfig) -> Result<()> {
        let inputs = &mut config.inputs;
        if let Some(v) = self.temp {
            inputs.temperature_anomaly_c = v;
        }
        if let Some(v) = self.rainfall {
            inputs.rainfall_increase_pct = v;
        }
        if let Some(v) = &self.infra {
            inputs.infrastructure = parse_category(v)?;
        }
        if let Some(v) = self.traffic {
            inputs.traffic_density_pct = v;
        }
        if let Some(v) = self.ev {
            inputs.ev_adoption_pct = v;
        }
        if let Some(v) = self.pop_growth {
            inputs.population_growth_pct = v;
        }
        if let Some(v) = self.economic_index {
            inputs.economic_index = v;
        }
        if let Some(v) = self.policy {
            inputs.policy_effectiveness_pct = v;
        }
        if let Some(v) = self.landfill_cost {
            inputs.landfill_cost_usd_per_ton = v;
        }
        if let Some(v) = &self.index {
            config.selected_index = Some(parse_index_name(v)?);
        }
        Ok(())
    }
}

/// Resolves the dashboard definition: explicit file, then the default file, then the sample city.
pub fn load(path: Option<&Path>) -> Result<DashboardConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Path::new(DEFAULT_CONFIG_PATH),
        None => {
            eprintln!("No dashboard file found, using the built-in sample city.");
            return Ok(DashboardConfig::default());
        }
    };

    eprintln!("Loading dashboard from '{}'...", path.display());
    let config = core_config::load_dashboard_file(path)
        .with_context(|| format!("Failed to load dashboard file {:?}", path))?;
    eprintln!("Dashboard loaded successfully.");
    Ok(config)
}

/// The fully resolved configuration, in the same layout as a dashboard file.
#[derive(Debug, Serialize)]
struct EffectiveConfig<'a> {
    schema_version: &'a str,
    dataset: &'a DashboardDataset,
    inputs: &'a SliderInputs,
    selected_index: IndexName,
}

pub fn to_yaml(dashboard: &Dashboard) -> Result<String> {
    let effective = EffectiveConfig {
        schema_version: SCHEMA_VERSION,
        dataset: dashboard.dataset(),
        inputs: dashboard.inputs(),
        selected_index: dashboard.selected_index(),
    };
    serde_yaml::to_string(&effective).context("Failed to serialize dashboard configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use metroscape_core::Validation;
    use metroscape_schemas::inputs::InfrastructureCategory;

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = DashboardConfig::default();
        let args = SliderArgs {
            temp: Some(3.5),
            infra: Some("commercial".to_string()),
            index: Some("noise".to_string()),
            ..SliderArgs::default()
        };
        args.apply(&mut config).unwrap();
        assert_eq!(config.inputs.temperature_anomaly_c, 3.5);
        assert_eq!(config.inputs.infrastructure, InfrastructureCategory::Commercial);
        assert_eq!(config.inputs.rainfall_increase_pct, 10);
        assert_eq!(config.selected_index, Some(IndexName::Noise));
    }

    #[test]
    fn unknown_category_override_fails() {
        let mut config = DashboardConfig::default();
        let args = SliderArgs {
            infra: Some("harbour".to_string()),
            ..SliderArgs::default()
        };
        assert!(args.apply(&mut config).is_err());
    }

    #[test]
    fn effective_config_reloads_to_the_same_dashboard() {
        let dashboard = Dashboard::new(DashboardConfig::default(), Validation::Lenient).unwrap();
        let yaml = to_yaml(&dashboard).unwrap();
        let reloaded = core_config::parse_dashboard_yaml("effective", &yaml).unwrap();
        assert_eq!(&reloaded.dataset, dashboard.dataset());
        assert_eq!(&reloaded.inputs, dashboard.inputs());
        assert_eq!(reloaded.selected_index, Some(IndexName::Air));
    }
}
