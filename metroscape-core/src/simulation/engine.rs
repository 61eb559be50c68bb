use super::state::{DivertedTons, LandfillLifespan, WasteOutcome, WasteStreams};
use crate::{
    error::{MetroscapeError, Result},
    simulation::builder::WasteSimulationBuilder,
    validation::Validation,
};
use metroscape_schemas::{
    inputs::WasteInputs,
    status::{Classification, Tier},
    waste::WasteModelConstants,
};

const DAYS_PER_MONTH: f64 = 30.0;
const KG_PER_TON: f64 = 1000.0;

pub struct WasteSimulation {
    pub(super) constants: WasteModelConstants,
    pub(super) inputs: WasteInputs,
    pub(super) validation: Validation,
}

impl WasteSimulation {
    pub fn run(&self) -> Result<WasteOutcome> {
        let c = &self.constants;
        let policy = f64::from(self.inputs.policy_effectiveness_pct) / 100.0;
        let landfill_cost = f64::from(self.inputs.landfill_cost_usd_per_ton);

        let effective_population = c.population * (1.0 + self.inputs.population_growth_pct / 100.0);
        let per_capita_kg_per_day = c.base_per_capita_kg_per_day * self.inputs.economic_index;
        let total_monthly_tons = effective_population * per_capita_kg_per_day * DAYS_PER_MONTH / KG_PER_TON;

        let streams = WasteStreams {
            residential: total_monthly_tons * c.composition.residential,
            commercial: total_monthly_tons * c.composition.commercial,
            organics: total_monthly_tons * c.composition.organics,
            construction_and_demolition: total_monthly_tons * c.composition.construction_and_demolition,
        };

        // Businesses respond to landfill cost; the factor is not capped at 1.
        let diverted = DivertedTons {
            residential_recycled: streams.residential * c.diversion_potential.residential_recycling * policy,
            commercial_recycled: streams.commercial
                * c.diversion_potential.commercial_recycling
                * (1.0 + landfill_cost / 100.0),
            organics_composted: streams.organics * c.diversion_potential.organics_composting * policy,
        };
        if self.validation.is_strict() && diverted.commercial_recycled > streams.commercial {
            return Err(MetroscapeError::OutOfDomain {
                field: "landfill_cost",
                value: landfill_cost,
                range: "a cost that keeps commercial diversion within the commercial stream",
            });
        }

        let total_diverted_tons = diverted.total();
        // C&D is never diverted and is added on top of the non-diverted total.
        let disposed_to_landfill_tons =
            total_monthly_tons - total_diverted_tons + streams.construction_and_demolition;
        let diversion_percent = if total_monthly_tons != 0.0 {
            total_diverted_tons / total_monthly_tons * 100.0
        } else {
            0.0
        };

        let lifespan = landfill_lifespan(c, disposed_to_landfill_tons);
        let lifespan_bar_percent = match lifespan {
            LandfillLifespan::Years(years) => {
                (years / c.projection_horizon_years * 100.0).clamp(0.0, 100.0)
            }
            LandfillLifespan::Unlimited => 100.0,
        };

        tracing::debug!(
            total_monthly_tons,
            disposed_to_landfill_tons,
            diversion_percent,
            "waste stream simulated"
        );

        Ok(WasteOutcome {
            effective_population,
            per_capita_kg_per_day,
            total_monthly_tons,
            streams,
            diverted,
            total_diverted_tons,
            disposed_to_landfill_tons,
            diversion_percent,
            lifespan,
            lifespan_bar_percent,
            lifespan_status: lifespan_status(&lifespan),
            diversion_status: diversion_status(diversion_percent),
        })
    }
}

/// Runs the waste model once with the given constants and inputs.
pub fn simulate_waste(
    constants: &WasteModelConstants,
    inputs: WasteInputs,
    validation: Validation,
) -> Result<WasteOutcome> {
    WasteSimulationBuilder::new()
        .with_constants(constants.clone())
        .with_inputs(inputs)
        .with_validation(validation)
        .build()?
        .run()
}

fn landfill_lifespan(constants: &WasteModelConstants, disposed_monthly_tons: f64) -> LandfillLifespan {
    let remaining = (constants.total_landfill_capacity_tons - constants.baseline_used_capacity_tons).max(0.0);
    let annual = disposed_monthly_tons * 12.0;
    if annual == 0.0 {
        return LandfillLifespan::Unlimited;
    }
    LandfillLifespan::Years(remaining / annual)
}

fn lifespan_status(lifespan: &LandfillLifespan) -> Classification {
    match lifespan.tier() {
        Tier::Critical => Classification::new(
            Tier::Critical,
            "Critical",
            "Landfill is nearing capacity. Immediate action required.",
        ),
        Tier::Warning => Classification::new(
            Tier::Warning,
            "Warning",
            "Landfill capacity is a growing concern. Policy intervention is needed.",
        ),
        Tier::Good => Classification::new(
            Tier::Good,
            "Stable",
            "Landfill capacity is stable. Policies are effectively managing waste disposal.",
        ),
    }
}

/// Tiers on the one-decimal value shown to the user.
fn diversion_status(diversion_percent: f64) -> Classification {
    // Rounded from the exact decimal expansion, so 29.9499... shows as 29.9.
    let shown = format!("{diversion_percent:.1}")
        .parse::<f64>()
        .unwrap_or(diversion_percent);
    if shown >= 50.0 {
        Classification::new(
            Tier::Good,
            "Excellent diversion",
            format!("Excellent diversion rate of {shown:.1}%. Your policies are highly effective."),
        )
    } else if shown >= 30.0 {
        Classification::new(
            Tier::Warning,
            "Moderate diversion",
            format!(
                "Moderate diversion rate of {shown:.1}%. Room for improvement in policy \
                 effectiveness and public adoption."
            ),
        )
    } else {
        Classification::new(
            Tier::Critical,
            "Low diversion",
            format!("Low diversion rate of {shown:.1}%. Significant pressure on landfill capacity remains."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(growth: f64, economic: f64, policy: u32, cost: u32) -> WasteInputs {
        WasteInputs {
            population_growth_pct: growth,
            economic_index: economic,
            policy_effectiveness_pct: policy,
            landfill_cost_usd_per_ton: cost,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn diversion_tier_uses_displayed_rounding() {
        assert_eq!(diversion_status(49.96).tier, Tier::Good);
        assert_eq!(diversion_status(49.94).tier, Tier::Warning);
        assert_eq!(diversion_status(29.99).tier, Tier::Warning);
        assert_eq!(diversion_status(12.0).tier, Tier::Critical);
    }

    #[test]
    fn diversion_just_below_a_tie_rounds_down() {
        let outcome =
            simulate_waste(&WasteModelConstants::default(), inputs(0.0, 1.0, 1, 82), Validation::Lenient)
                .unwrap();
        assert!(outcome.diversion_percent < 29.95);
        assert_eq!(outcome.diversion_status.tier, Tier::Critical);
        assert!(outcome.diversion_status.message.contains("29.9%"));
    }

    #[test]
    fn shrinking_population_keeps_lenient_arithmetic() {
        let outcome =
            simulate_waste(&WasteModelConstants::default(), inputs(-150.0, 1.0, 50, 0), Validation::Lenient)
                .unwrap();
        assert!(close(outcome.total_monthly_tons, -6_000.0));
        assert!(close(outcome.diversion_percent, 35.0));
        assert_eq!(outcome.diversion_status.tier, Tier::Warning);

        let landfill_excluding_cd = (outcome.disposed_to_landfill_tons
            - outcome.streams.construction_and_demolition)
            / outcome.total_monthly_tons
            * 100.0;
        assert!(close(outcome.diversion_percent + landfill_excluding_cd, 100.0));
    }

    #[test]
    fn growth_and_economy_scale_generation() {
        let outcome =
            simulate_waste(&WasteModelConstants::default(), inputs(10.0, 1.5, 50, 0), Validation::Lenient)
                .unwrap();
        // 550000 * 1.2 * 30 / 1000
        assert!(close(outcome.total_monthly_tons, 19_800.0));
        assert!(close(outcome.effective_population, 550_000.0));
        assert!(close(outcome.per_capita_kg_per_day, 1.2));
    }

    #[test]
    fn zero_disposal_is_unlimited() {
        let constants = WasteModelConstants::default();
        assert_eq!(landfill_lifespan(&constants, 0.0), LandfillLifespan::Unlimited);

        let outcome = simulate_waste(&constants, inputs(0.0, 0.0, 50, 0), Validation::Lenient).unwrap();
        assert_eq!(outcome.lifespan, LandfillLifespan::Unlimited);
        assert_eq!(outcome.lifespan_bar_percent, 100.0);
        assert_eq!(outcome.diversion_percent, 0.0);
        assert_eq!(outcome.lifespan_status.tier, Tier::Good);
    }

    #[test]
    fn bar_is_clamped_but_years_are_not() {
        let constants = WasteModelConstants {
            total_landfill_capacity_tons: 100_000_000.0,
            ..WasteModelConstants::default()
        };
        let outcome = simulate_waste(&constants, inputs(0.0, 1.0, 50, 0), Validation::Lenient).unwrap();
        let years = outcome.lifespan.years().unwrap();
        assert!(years > constants.projection_horizon_years);
        assert_eq!(outcome.lifespan_bar_percent, 100.0);
    }

    #[test]
    fn high_landfill_cost_over_diverts_commercial_waste() {
        let constants = WasteModelConstants::default();
        let lenient = simulate_waste(&constants, inputs(0.0, 1.0, 50, 100), Validation::Lenient).unwrap();
        // 3000 * 0.65 * 2 = 3900 > 3000
        assert!(close(lenient.diverted.commercial_recycled, 3_900.0));
        assert!(lenient.diverted.commercial_recycled > lenient.streams.commercial);

        let strict = simulate_waste(&constants, inputs(0.0, 1.0, 50, 100), Validation::Strict);
        assert!(matches!(
            strict,
            Err(MetroscapeError::OutOfDomain { field: "landfill_cost", .. })
        ));
    }

    #[test]
    fn strict_builder_rejects_bad_inputs() {
        let result = WasteSimulationBuilder::new()
            .with_inputs(inputs(0.0, 1.0, 140, 0))
            .with_validation(Validation::Strict)
            .build();
        assert!(matches!(
            result,
            Err(MetroscapeError::OutOfDomain { field: "policy_effectiveness", .. })
        ));

        let lenient = WasteSimulationBuilder::new()
            .with_inputs(inputs(0.0, 1.0, 140, 0))
            .build();
        assert!(lenient.is_ok());
    }

    #[test]
    fn monthly_series_broadcasts_the_snapshot() {
        let outcome =
            simulate_waste(&WasteModelConstants::default(), inputs(0.0, 1.0, 50, 0), Validation::Lenient)
                .unwrap();
        let (disposed, diversion) = outcome.monthly_series(7);
        assert_eq!(disposed.len(), 7);
        assert!(disposed.iter().all(|v| *v == outcome.disposed_to_landfill_tons));
        assert!(diversion.iter().all(|v| *v == outcome.diversion_percent));
    }
}
