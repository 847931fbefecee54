//! Population management and the simulation engine.

mod builder;
mod engine;
mod parameters;
mod population;

pub use builder::EnvironmentBuilder;
pub use engine::Environment;
pub use parameters::{ExperimentConfig, MortalityConfig, SelectionConfig, SpeciesConfig};
pub use population::{GenotypeCounts, Population};
