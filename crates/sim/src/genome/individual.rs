use crate::base::Genotype;
use crate::errors::{IncompatibleSpecies, MatingError};
use crate::genome::{Gene, Genome};
use core::fmt;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// An individual organism: an ordered collection of genes belonging to a
/// species, with a lazily computed fitness.
///
/// The gene order matches the species genome definition; every individual of
/// a species carries the same ordered set of locus names. The `species` is
/// stored in an `Arc<str>` so cloning individuals is cheap for the
/// identifier field.
///
/// Fitness is memoized through an explicit `Option<f64>` flag: once computed
/// it is returned for the individual's lifetime, even when a later call
/// passes a different fitness table, and a legitimate value of exactly 0.0
/// is never mistaken for "not yet computed". There is no invalidation hook;
/// the cache is not refreshed if genes were mutated after the first call.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Species identifier; mating requires equality
    species: Arc<str>,
    /// Genes in genome order
    genes: Vec<Gene>,
    /// Cached fitness value. `None` indicates that the fitness has not
    /// been computed/memoized yet.
    fitness: Option<f64>,
}

impl Individual {
    /// Create a new individual from its genes.
    pub fn new(species: impl Into<Arc<str>>, genes: Vec<Gene>) -> Self {
        Self {
            species: species.into(),
            genes,
            fitness: None,
        }
    }

    /// Generate a fresh individual from a species genome definition.
    ///
    /// One gene is created per locus; each of its two alleles is
    /// independently dominant with the locus's configured chance.
    pub fn from_genome<R: Rng + ?Sized>(
        species: impl Into<Arc<str>>,
        genome: &Genome,
        rng: &mut R,
    ) -> Self {
        let genes = genome
            .loci()
            .iter()
            .map(|locus| Gene::sample(locus.name.as_str(), locus.dominant_chance, rng))
            .collect();
        Self::new(species, genes)
    }

    /// Return the species name as a `&str`.
    #[inline]
    pub fn species(&self) -> &str {
        &self.species
    }

    /// The genes in genome order.
    #[inline]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Look up the genotype at a locus by name.
    ///
    /// Absence is a valid result, not an error: returns `None` when the
    /// individual does not carry the trait.
    pub fn trait_genotype(&self, name: &str) -> Option<Genotype> {
        self.genes
            .iter()
            .find(|gene| gene.name() == name)
            .map(|gene| gene.genotype())
    }

    /// Mate with another individual, producing one offspring.
    ///
    /// Genes are paired by position: index i of one parent with index i of
    /// the other. Callers must keep the per-species genome ordering intact:
    /// the pairing does no reordering or name reconciliation, though a
    /// mismatched pair still fails through [`Gene::combine`]. Both parents
    /// are left untouched.
    ///
    /// # Errors
    /// Returns [`MatingError::Species`] if the parents belong to different
    /// species, or [`MatingError::Trait`] if a positionally paired gene
    /// belongs to a different locus.
    pub fn combine<R: Rng + ?Sized>(
        &self,
        other: &Individual,
        rng: &mut R,
    ) -> Result<Individual, MatingError> {
        if self.species != other.species {
            return Err(IncompatibleSpecies {
                left: Arc::clone(&self.species),
                right: Arc::clone(&other.species),
            }
            .into());
        }

        let mut genes = Vec::with_capacity(self.genes.len());
        for (i, gene) in self.genes.iter().enumerate() {
            genes.push(gene.combine(&other.genes[i], rng)?);
        }

        Ok(Individual::new(Arc::clone(&self.species), genes))
    }

    /// Overall fitness given a table of per-trait fitness contributions.
    ///
    /// Sums the table value of every gene whose name is present in the table
    /// and whose phenotype is expressed. The first call computes and caches
    /// the result; subsequent calls return the cached value regardless of
    /// the table argument.
    pub fn fitness(&mut self, trait_fitnesses: &HashMap<String, f64>) -> f64 {
        if let Some(fitness) = self.fitness {
            return fitness;
        }

        let fitness = self
            .genes
            .iter()
            .filter(|gene| gene.is_expressed())
            .filter_map(|gene| trait_fitnesses.get(gene.name()))
            .sum();
        self.fitness = Some(fitness);
        fitness
    }

    /// Return the cached fitness value for this individual.
    ///
    /// Returns `None` if the fitness has not yet been computed.
    #[inline]
    pub fn cached_fitness(&self) -> Option<f64> {
        self.fitness
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.species)?;
        for gene in &self.genes {
            write!(f, " {gene}")?;
        }
        write!(f, ">")
    }
}
