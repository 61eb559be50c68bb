use crate::{error::Result, simulation::engine::WasteSimulation, validation::Validation};
use metroscape_schemas::{inputs::WasteInputs, waste::WasteModelConstants};

/// A fluent builder for a [`WasteSimulation`].
///
/// Constants default to the sample city and inputs to the initial slider
/// positions, so only the parts that differ need to be set.
#[derive(Default)]
pub struct WasteSimulationBuilder {
    constants: Option<WasteModelConstants>,
    inputs: Option<WasteInputs>,
    validation: Validation,
}

impl WasteSimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(mut self, constants: WasteModelConstants) -> Self {
        self.constants = Some(constants);
        self
    }

    pub fn with_inputs(mut self, inputs: WasteInputs) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Consumes the builder and returns a configured `WasteSimulation`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `OutOfDomain` for inputs the model cannot
    /// interpret: policy effectiveness above 100%, a population shrinking by
    /// more than 100%, or a negative economic index.
    pub fn build(self) -> Result<WasteSimulation> {
        let inputs = self.inputs.unwrap_or(WasteInputs {
            population_growth_pct: 0.0,
            economic_index: 1.0,
            policy_effectiveness_pct: 50,
            landfill_cost_usd_per_ton: 0,
        });

        let v = self.validation;
        v.check_range("population_growth", inputs.population_growth_pct, -100.0, f64::INFINITY, ">= -100")?;
        v.check_range("economic_index", inputs.economic_index, 0.0, f64::INFINITY, ">= 0")?;
        v.check_range(
            "policy_effectiveness",
            f64::from(inputs.policy_effectiveness_pct),
            0.0,
            100.0,
            "0-100",
        )?;

        Ok(WasteSimulation {
            constants: self.constants.unwrap_or_default(),
            inputs,
            validation: v,
        })
    }
}
