use crate::errors::TraitNotFound;
use crate::simulation::Population;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Allele frequencies of a fixed set of traits, recorded once per
/// generation.
///
/// The caller records between or after simulation steps; the collected
/// sequence is what a charting layer plots as "frequency vs. time".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyTrajectory {
    /// The traits tracked by every record
    trait_names: Vec<String>,
    /// One frequency map per recorded generation
    records: Vec<HashMap<String, f64>>,
}

impl FrequencyTrajectory {
    /// Create an empty trajectory tracking the given traits.
    pub fn new(trait_names: Vec<String>) -> Self {
        Self {
            trait_names,
            records: Vec::new(),
        }
    }

    /// The tracked trait names.
    pub fn trait_names(&self) -> &[String] {
        &self.trait_names
    }

    /// All recorded frequency maps, oldest first.
    pub fn records(&self) -> &[HashMap<String, f64>] {
        &self.records
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record the population's current allele frequencies.
    ///
    /// # Errors
    /// Returns [`TraitNotFound`] if any individual lacks a tracked trait;
    /// nothing is recorded in that case.
    pub fn record(&mut self, population: &Population) -> Result<(), TraitNotFound> {
        let frequencies = population.allele_frequencies(&self.trait_names)?;
        self.records.push(frequencies);
        Ok(())
    }

    /// Frequency of one trait at one recorded index.
    pub fn get(&self, record: usize, trait_name: &str) -> Option<f64> {
        self.records.get(record)?.get(trait_name).copied()
    }

    /// The most recent frequency record, if any.
    pub fn latest(&self) -> Option<&HashMap<String, f64>> {
        self.records.last()
    }
}
