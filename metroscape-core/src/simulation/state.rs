use metroscape_schemas::status::{Classification, Tier};
use serde::Serialize;
use std::fmt;

/// Monthly tonnage per waste stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteStreams {
    pub residential: f64,
    pub commercial: f64,
    pub organics: f64,
    pub construction_and_demolition: f64,
}

/// Monthly tonnage kept out of landfill. Construction and demolition is never diverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivertedTons {
    pub residential_recycled: f64,
    pub commercial_recycled: f64,
    pub organics_composted: f64,
}

impl DivertedTons {
    pub fn total(&self) -> f64 {
        self.residential_recycled + self.commercial_recycled + self.organics_composted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum LandfillLifespan {
    Years(f64),
    /// Nothing reaches the landfill, so it never fills.
    Unlimited,
}

impl LandfillLifespan {
    pub fn years(&self) -> Option<f64> {
        match self {
            LandfillLifespan::Years(years) => Some(*years),
            LandfillLifespan::Unlimited => None,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            LandfillLifespan::Years(years) if *years < 5.0 => Tier::Critical,
            LandfillLifespan::Years(years) if *years < 15.0 => Tier::Warning,
            _ => Tier::Good,
        }
    }
}

impl fmt::Display for LandfillLifespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandfillLifespan::Years(years) => write!(f, "~{years:.1} years left"),
            LandfillLifespan::Unlimited => f.write_str("Lifespan unlimited by this model"),
        }
    }
}

/// Fill color of the landfill progress bar.
pub fn lifespan_bar_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Critical => "#e05050",
        Tier::Warning => "#f0e050",
        Tier::Good => "#40e0a0",
    }
}

/// One snapshot of the waste system under the current inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteOutcome {
    pub effective_population: f64,
    pub per_capita_kg_per_day: f64,
    pub total_monthly_tons: f64,
    pub streams: WasteStreams,
    pub diverted: DivertedTons,
    pub total_diverted_tons: f64,
    pub disposed_to_landfill_tons: f64,
    pub diversion_percent: f64,
    pub lifespan: LandfillLifespan,
    /// Lifespan relative to the projection horizon, clamped to 0-100 for display.
    pub lifespan_bar_percent: f64,
    pub lifespan_status: Classification,
    pub diversion_status: Classification,
}

impl WasteOutcome {
    /// Disposed tonnage and diversion percent per month.
    ///
    /// The model has no time dimension, so every month carries the same snapshot value.
    pub fn monthly_series(&self, months: usize) -> (Vec<f64>, Vec<f64>) {
        (
            vec![self.disposed_to_landfill_tons; months],
            vec![self.diversion_percent; months],
        )
    }

    pub fn bar_color(&self) -> &'static str {
        lifespan_bar_color(self.lifespan_status.tier)
    }
}
