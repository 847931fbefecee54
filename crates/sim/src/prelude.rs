//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types in the traitevo library.
//!
//! # Example
//!
//! ```
//! use traitevo_sim::prelude::*;
//!
//! let env = EnvironmentBuilder::new()
//!     .species("Frog")
//!     .genome(["Crazy Color"])
//!     .population_size(10)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! ```

pub use crate::errors;
pub use crate::analysis::FrequencyTrajectory;
pub use crate::base::{Allele, Genotype, Zygosity};
pub use crate::genome::{Gene, Genome, Individual, Locus};
pub use crate::simulation::{
    Environment, EnvironmentBuilder, ExperimentConfig, GenotypeCounts, MortalityConfig,
    Population, SelectionConfig, SpeciesConfig,
};
