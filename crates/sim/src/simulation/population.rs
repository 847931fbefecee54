//! Population management and aggregation queries.

use crate::base::Zygosity;
use crate::errors::TraitNotFound;
use crate::genome::{Genome, Individual};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counts of the three genotype classes at one locus across a population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeCounts {
    /// Individuals carrying two dominant alleles
    pub homozygous_dominant: usize,
    /// Individuals carrying one dominant and one recessive allele
    pub heterozygous: usize,
    /// Individuals carrying two recessive alleles
    pub homozygous_recessive: usize,
}

impl GenotypeCounts {
    /// Total number of individuals counted.
    pub fn total(&self) -> usize {
        self.homozygous_dominant + self.heterozygous + self.homozygous_recessive
    }

    /// The standard allele-frequency estimator: dominant alleles carried,
    /// divided by total alleles (2 per individual). An empty count yields
    /// 0.0 rather than dividing by zero.
    pub fn allele_frequency(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (2 * self.homozygous_dominant + self.heterozygous) as f64 / (2 * total) as f64
    }
}

/// A population of individuals.
///
/// The collection is conceptually unordered (order only matters for
/// display), mutable through immigration, species seeding, and the
/// engine's culling. Nothing prevents mixing species here; callers must
/// keep trait-compatible individuals together for mating correctness.
#[derive(Debug, Clone, Default)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create an empty population.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get mutable access to individuals.
    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Replace the entire population with new individuals.
    pub fn set_individuals(&mut self, individuals: Vec<Individual>) {
        self.individuals = individuals;
    }

    /// Take ownership of the individuals, leaving the population empty.
    pub fn take_individuals(&mut self) -> Vec<Individual> {
        std::mem::take(&mut self.individuals)
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Get a mutable reference to a specific individual.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(index)
    }

    /// Append external individuals. Ownership transfers in.
    pub fn immigrate(&mut self, individuals: Vec<Individual>) {
        self.individuals.extend(individuals);
    }

    /// Generate `count` fresh individuals of a species and append them.
    pub fn add_species<R: Rng + ?Sized>(
        &mut self,
        species: &str,
        genome: &Genome,
        count: usize,
        rng: &mut R,
    ) {
        self.individuals.extend(
            (0..count).map(|_| Individual::from_genome(species, genome, rng)),
        );
    }

    /// Count the genotype classes at one locus across all individuals.
    ///
    /// # Errors
    /// Returns [`TraitNotFound`] if any individual does not carry the trait;
    /// no partial result is produced.
    pub fn genotype_counts(&self, trait_name: &str) -> Result<GenotypeCounts, TraitNotFound> {
        let mut counts = GenotypeCounts::default();
        for individual in &self.individuals {
            let genotype =
                individual
                    .trait_genotype(trait_name)
                    .ok_or_else(|| TraitNotFound {
                        trait_name: trait_name.to_owned(),
                    })?;
            match genotype.zygosity() {
                Zygosity::HomozygousDominant => counts.homozygous_dominant += 1,
                Zygosity::Heterozygous => counts.heterozygous += 1,
                Zygosity::HomozygousRecessive => counts.homozygous_recessive += 1,
            }
        }
        Ok(counts)
    }

    /// Dominant-allele frequency for each requested trait.
    ///
    /// For every name, each individual's genotype is classified as
    /// homozygous-dominant, heterozygous, or homozygous-recessive, and the
    /// frequency is (2·homozygousDominant + heterozygous) / (2·N).
    ///
    /// # Errors
    /// Returns [`TraitNotFound`] if any individual lacks one of the
    /// requested traits.
    pub fn allele_frequencies<S: AsRef<str>>(
        &self,
        trait_names: &[S],
    ) -> Result<HashMap<String, f64>, TraitNotFound> {
        let mut frequencies = HashMap::with_capacity(trait_names.len());
        for name in trait_names {
            let counts = self.genotype_counts(name.as_ref())?;
            frequencies.insert(name.as_ref().to_owned(), counts.allele_frequency());
        }
        Ok(frequencies)
    }
}
