//! Builder pattern for creating environments.
//!
//! Provides a fluent API for configuring and creating environments with
//! sensible defaults and validation.

pub use crate::errors::BuilderError;
use crate::genome::Genome;
use crate::simulation::{Environment, MortalityConfig, Population, SelectionConfig};
use std::collections::HashMap;

/// Builder for constructing [`Environment`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use traitevo_sim::simulation::EnvironmentBuilder;
///
/// // Neutral environment: no fitness differences, no death
/// let env = EnvironmentBuilder::new()
///     .species("Frog")
///     .genome(["Crazy Color", "Long Tongue"])
///     .population_size(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// // With selection and trait-linked death
/// let env = EnvironmentBuilder::new()
///     .species("Frog")
///     .genome(["Crazy Color", "Long Tongue"])
///     .dominant_chances([0.9, 0.1])
///     .population_size(100)
///     .litter_size(2)
///     .mating_fraction(0.4)
///     .mating_fitness("Long Tongue", 1.5)
///     .death_chance("Crazy Color", 0.05)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentBuilder {
    // Required parameters
    species: Option<String>,
    population_size: Option<usize>,

    // Genome definition
    genome_names: Vec<String>,
    dominant_chances: Option<Vec<f64>>,

    // Selection and mortality (with defaults)
    litter_size: Option<usize>,
    mating_fraction: Option<f64>,
    mating_fitnesses: HashMap<String, f64>,
    death_chances: HashMap<String, f64>,

    seed: Option<u64>,
}

impl EnvironmentBuilder {
    /// Create a new environment builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the species name (required).
    pub fn species(mut self, name: impl Into<String>) -> Self {
        self.species = Some(name.into());
        self
    }

    /// Set the ordered trait names of the species genome (required).
    pub fn genome<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.genome_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-locus dominant-allele chances (default: 0.5 everywhere).
    pub fn dominant_chances(mut self, chances: impl IntoIterator<Item = f64>) -> Self {
        self.dominant_chances = Some(chances.into_iter().collect());
        self
    }

    /// Set the initial population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the offspring per mated pair (default: 3).
    pub fn litter_size(mut self, litter_size: usize) -> Self {
        self.litter_size = Some(litter_size);
        self
    }

    /// Set the fraction of the population admitted to the mating pool
    /// (default: 0.5).
    pub fn mating_fraction(mut self, fraction: f64) -> Self {
        self.mating_fraction = Some(fraction);
        self
    }

    /// Set the fitness contribution of an expressed trait.
    pub fn mating_fitness(mut self, trait_name: impl Into<String>, fitness: f64) -> Self {
        self.mating_fitnesses.insert(trait_name.into(), fitness);
        self
    }

    /// Set the death chance of an expressed trait.
    pub fn death_chance(mut self, trait_name: impl Into<String>, chance: f64) -> Self {
        self.death_chances.insert(trait_name.into(), chance);
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the environment, generating the initial
    /// population.
    pub fn build(self) -> Result<Environment, BuilderError> {
        let species = self.species.ok_or(BuilderError::MissingRequired("species"))?;
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        if self.genome_names.is_empty() {
            return Err(BuilderError::MissingRequired("genome"));
        }

        let genome = match &self.dominant_chances {
            Some(chances) => Genome::with_chances(self.genome_names, chances)?,
            None => Genome::uniform(self.genome_names)?,
        };

        let selection = SelectionConfig::new(
            self.mating_fitnesses,
            self.litter_size.unwrap_or(3),
            self.mating_fraction.unwrap_or(0.5),
        )?;
        let mortality = MortalityConfig::new(self.death_chances)?;

        let mut environment =
            Environment::new(Population::empty(), selection, mortality, self.seed);
        environment.add_species(&species, &genome, population_size);
        Ok(environment)
    }
}
