use serde::{Deserialize, Serialize};

/// Fractions of total waste per stream.
///
/// The default fractions sum to 1.05; the landfill model adds construction and
/// demolition back on top of the non-diverted total, so the sum is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteComposition {
    pub residential: f64,
    pub commercial: f64,
    pub organics: f64,
    pub construction_and_demolition: f64,
}

/// Maximum share of a stream that can be diverted from landfill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversionPotential {
    pub residential_recycling: f64,
    pub commercial_recycling: f64,
    pub organics_composting: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteModelConstants {
    pub population: f64,
    pub base_per_capita_kg_per_day: f64,
    pub total_landfill_capacity_tons: f64,
    pub baseline_used_capacity_tons: f64,
    pub projection_horizon_years: f64,
    pub composition: WasteComposition,
    pub diversion_potential: DiversionPotential,
}

impl Default for WasteModelConstants {
    fn default() -> Self {
        Self {
            population: 500_000.0,
            base_per_capita_kg_per_day: 0.8,
            total_landfill_capacity_tons: 200_000.0,
            baseline_used_capacity_tons: 80_000.0,
            projection_horizon_years: 50.0,
            composition: WasteComposition {
                residential: 0.60,
                commercial: 0.25,
                organics: 0.15,
                construction_and_demolition: 0.05,
            },
            diversion_potential: DiversionPotential {
                residential_recycling: 0.40,
                commercial_recycling: 0.65,
                organics_composting: 0.90,
            },
        }
    }
}
