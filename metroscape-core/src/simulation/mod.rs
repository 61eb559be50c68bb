pub mod builder;
pub mod engine;
pub mod state;

pub use builder::WasteSimulationBuilder;
pub use engine::{simulate_waste, WasteSimulation};
pub use state::{LandfillLifespan, WasteOutcome};
