//! Climate scenario risk and infrastructure vulnerability.

use crate::error::{MetroscapeError, Result};
use metroscape_schemas::{
    inputs::InfrastructureCategory,
    status::{Classification, Tier},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateRisk {
    pub risk_score: f64,
    pub classification: Classification,
}

/// Linear risk score: ten points per degree plus one point per 5% rainfall.
pub fn risk_score(temperature_anomaly_c: f64, rainfall_increase_pct: i32) -> f64 {
    temperature_anomaly_c * 10.0 + f64::from(rainfall_increase_pct) / 5.0
}

pub fn assess_climate_risk(temperature_anomaly_c: f64, rainfall_increase_pct: i32) -> ClimateRisk {
    let score = risk_score(temperature_anomaly_c, rainfall_increase_pct);
    let classification = if score > 30.0 {
        Classification::new(
            Tier::Critical,
            "High Risk Scenario",
            format!(
                "A {temperature_anomaly_c}°C temperature rise and {rainfall_increase_pct}% rainfall increase \
                 could lead to heat stress, power grid failures, and urban flooding."
            ),
        )
    } else if score > 15.0 {
        Classification::new(
            Tier::Warning,
            "Moderate Risk Scenario",
            "This scenario presents increased risk of infrastructure stress and localized flooding. \
             Prepare for more frequent heatwaves.",
        )
    } else {
        Classification::new(
            Tier::Good,
            "Low Risk Scenario",
            "This climate scenario poses minimal risks to urban infrastructure and health.",
        )
    };
    tracing::debug!(score, tier = %classification.tier, "climate risk assessed");

    ClimateRisk {
        risk_score: score,
        classification,
    }
}

pub fn parse_category(value: &str) -> Result<InfrastructureCategory> {
    match value.trim().to_ascii_lowercase().as_str() {
        "residential" => Ok(InfrastructureCategory::Residential),
        "commercial" => Ok(InfrastructureCategory::Commercial),
        "transport" => Ok(InfrastructureCategory::Transport),
        _ => Err(MetroscapeError::UnknownCategory(value.to_string())),
    }
}

/// Temperature (°C) and rainfall (%) limits beyond which a category is vulnerable.
pub fn thresholds(category: InfrastructureCategory) -> (f64, i32) {
    match category {
        InfrastructureCategory::Residential => (2.0, 40),
        InfrastructureCategory::Commercial => (3.0, 60),
        InfrastructureCategory::Transport => (1.0, 20),
    }
}

pub fn assess_infrastructure(
    category: InfrastructureCategory,
    temperature_anomaly_c: f64,
    rainfall_increase_pct: i32,
) -> Classification {
    let (max_temp, max_rain) = thresholds(category);
    let vulnerable = temperature_anomaly_c > max_temp || rainfall_increase_pct > max_rain;

    let message = match (category, vulnerable) {
        (InfrastructureCategory::Residential, true) => {
            "New residential buildings may face structural stress from heat and increased flood risk. \
             Review building codes."
        }
        (InfrastructureCategory::Residential, false) => {
            "This residential project is designed to withstand a moderate climate shift."
        }
        (InfrastructureCategory::Commercial, true) => {
            "Commercial infrastructure is vulnerable to power outages and supply chain disruptions \
             from extreme weather."
        }
        (InfrastructureCategory::Commercial, false) => {
            "Commercial project is well-suited for a changing climate, with backup systems in place."
        }
        (InfrastructureCategory::Transport, true) => {
            "Transport hubs are highly susceptible to flooding and heat-related track damage. \
             Review drainage and cooling."
        }
        (InfrastructureCategory::Transport, false) => {
            "Transport hub is built for climate resilience, minimizing service disruptions."
        }
    };

    if vulnerable {
        Classification::new(Tier::Critical, "High Vulnerability", message)
    } else {
        Classification::new(Tier::Good, "Resilient", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_risk_message_interpolates_inputs() {
        let risk = assess_climate_risk(3.5, 20);
        assert!((risk.risk_score - 39.0).abs() < 1e-9);
        assert_eq!(risk.classification.tier, Tier::Critical);
        assert_eq!(risk.classification.title, "High Risk Scenario");
        assert!(risk.classification.message.contains("3.5°C"));
        assert!(risk.classification.message.contains("20%"));
    }

    #[test]
    fn thresholds_are_strict() {
        // 1.5 * 10 + 0 = 15 is not above 15
        assert_eq!(assess_climate_risk(1.5, 0).classification.tier, Tier::Good);
        assert_eq!(assess_climate_risk(1.5, 5).classification.tier, Tier::Warning);
        // 2 * 10 + 50 / 5 = 30 is not above 30
        assert_eq!(assess_climate_risk(2.0, 50).classification.tier, Tier::Warning);
        assert_eq!(assess_climate_risk(2.0, 55).classification.tier, Tier::Critical);
    }

    #[test]
    fn rainfall_uses_real_division() {
        assert!((risk_score(0.0, 22) - 4.4).abs() < 1e-9);
    }

    #[test]
    fn tier_never_drops_as_inputs_grow() {
        let mut previous = Tier::Good;
        for step in 0..=50 {
            let tier = assess_climate_risk(step as f64 * 0.1, 20).classification.tier;
            assert!(tier >= previous);
            previous = tier;
        }
        let mut previous = Tier::Good;
        for rain in 0..=100 {
            let tier = assess_climate_risk(1.0, rain).classification.tier;
            assert!(tier >= previous);
            previous = tier;
        }
    }

    #[test]
    fn transport_below_thresholds_is_resilient() {
        let c = assess_infrastructure(InfrastructureCategory::Transport, 0.5, 10);
        assert_eq!(c.tier, Tier::Good);
        assert_eq!(c.title, "Resilient");
    }

    #[test]
    fn either_threshold_triggers_vulnerability() {
        let by_temp = assess_infrastructure(InfrastructureCategory::Residential, 2.1, 0);
        let by_rain = assess_infrastructure(InfrastructureCategory::Residential, 0.0, 41);
        let neither = assess_infrastructure(InfrastructureCategory::Residential, 2.0, 40);
        assert_eq!(by_temp.tier, Tier::Critical);
        assert_eq!(by_rain.tier, Tier::Critical);
        assert_eq!(neither.tier, Tier::Good);

        let commercial = assess_infrastructure(InfrastructureCategory::Commercial, 2.5, 50);
        assert_eq!(commercial.tier, Tier::Good);
        assert!(commercial.message.starts_with("Commercial project"));
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert_eq!(
            parse_category("Transport").unwrap(),
            InfrastructureCategory::Transport
        );
        assert!(matches!(
            parse_category("industrial"),
            Err(MetroscapeError::UnknownCategory(c)) if c == "industrial"
        ));
    }
}
