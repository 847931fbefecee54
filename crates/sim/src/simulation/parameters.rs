//! Simulation parameters and configuration.
//!
//! This module provides parameter structures for configuring simulations:
//! mate-selection settings, trait-linked death chances, species seeding, and
//! the serializable experiment description consumed by the CLI.

use crate::errors::{GenomeError, ParameterError};
use crate::genome::Genome;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_litter_size() -> usize {
    3
}

fn default_mating_fraction() -> f64 {
    0.5
}

/// Parameters for fitness-based mate selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Fitness contribution of each expressed trait (any real number)
    #[serde(default)]
    pub mating_fitnesses: HashMap<String, f64>,
    /// Offspring per mated pair per generation
    #[serde(default = "default_litter_size")]
    pub litter_size: usize,
    /// Fraction of the population admitted to the mating pool
    #[serde(default = "default_mating_fraction")]
    pub mating_fraction: f64,
}

impl SelectionConfig {
    /// Create a new selection configuration.
    ///
    /// # Errors
    /// Returns an error if `mating_fraction` is outside [0.0, 1.0].
    pub fn new(
        mating_fitnesses: HashMap<String, f64>,
        litter_size: usize,
        mating_fraction: f64,
    ) -> Result<Self, ParameterError> {
        if !(0.0..=1.0).contains(&mating_fraction) {
            return Err(ParameterError::InvalidProbability(
                "mating_fraction",
                mating_fraction,
            ));
        }
        Ok(Self {
            mating_fitnesses,
            litter_size,
            mating_fraction,
        })
    }

    /// Create neutral selection: no fitness differences, default litter
    /// size (3) and mating fraction (0.5).
    pub fn neutral() -> Self {
        Self {
            mating_fitnesses: HashMap::new(),
            litter_size: default_litter_size(),
            mating_fraction: default_mating_fraction(),
        }
    }

    /// Validate the configuration (used after deserialization, which
    /// bypasses the checked constructor).
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(0.0..=1.0).contains(&self.mating_fraction) {
            return Err(ParameterError::InvalidProbability(
                "mating_fraction",
                self.mating_fraction,
            ));
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Parameters for trait-linked death.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MortalityConfig {
    /// Probability in [0.0, 1.0] of instant death per expressed trait
    #[serde(default)]
    pub death_chances: HashMap<String, f64>,
}

impl MortalityConfig {
    /// Create a new mortality configuration.
    ///
    /// # Errors
    /// Returns an error if any chance is outside [0.0, 1.0].
    pub fn new(death_chances: HashMap<String, f64>) -> Result<Self, ParameterError> {
        let config = Self { death_chances };
        config.validate()?;
        Ok(config)
    }

    /// No trait-linked death.
    pub fn none() -> Self {
        Self::default()
    }

    /// Validate the configuration (used after deserialization, which
    /// bypasses the checked constructor).
    pub fn validate(&self) -> Result<(), ParameterError> {
        for &chance in self.death_chances.values() {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ParameterError::InvalidProbability("death_chance", chance));
            }
        }
        Ok(())
    }
}

/// Description of the species seeded into the initial population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Species name
    pub name: String,
    /// Ordered trait (locus) names
    pub traits: Vec<String>,
    /// Per-locus dominant-allele chances; every locus gets 0.5 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_allele_chances: Option<Vec<f64>>,
    /// Number of individuals to generate
    pub count: usize,
}

impl SpeciesConfig {
    /// Build the genome definition described by this configuration.
    ///
    /// # Errors
    /// Returns an error if the chance list does not match the trait list,
    /// a chance is outside [0.0, 1.0], or a trait name repeats.
    pub fn genome(&self) -> Result<Genome, GenomeError> {
        match &self.dominant_allele_chances {
            Some(chances) => Genome::with_chances(self.traits.iter().cloned(), chances),
            None => Genome::uniform(self.traits.iter().cloned()),
        }
    }
}

/// A complete, serializable experiment description.
///
/// This is the JSON document the CLI writes with `init` and consumes with
/// `run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// The species seeded into the initial population
    pub species: SpeciesConfig,
    /// Number of generations to simulate
    pub generations: usize,
    /// Mate-selection parameters
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Trait-linked death parameters
    #[serde(default)]
    pub mortality: MortalityConfig,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate probabilities that deserialization cannot check.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.selection.validate()?;
        self.mortality.validate()
    }
}
