//! Trait-linked death.
//!
//! Each expressed trait with a configured death chance triggers one
//! independent Bernoulli trial per individual per generation; a single
//! success is enough to remove the individual.

use crate::genome::Individual;
use rand::Rng;
use std::collections::HashMap;

/// Decide whether an individual dies this generation.
///
/// One independent trial is drawn for each gene whose name is present in
/// `death_chances` and whose phenotype is expressed; any success kills.
/// Trials stop at the first success; later traits cannot kill an
/// individual twice, so the marking is idempotent by construction.
pub fn dies<R: Rng + ?Sized>(
    individual: &Individual,
    death_chances: &HashMap<String, f64>,
    rng: &mut R,
) -> bool {
    individual
        .genes()
        .iter()
        .filter(|gene| gene.is_expressed())
        .filter_map(|gene| death_chances.get(gene.name()))
        .any(|&chance| rng.random::<f64>() < chance)
}

/// Run the death trials for a whole population slice.
///
/// Returns one flag per individual, in order: `true` marks the individual
/// for removal.
pub fn mark_doomed<R: Rng + ?Sized>(
    individuals: &[Individual],
    death_chances: &HashMap<String, f64>,
    rng: &mut R,
) -> Vec<bool> {
    individuals
        .iter()
        .map(|individual| dies(individual, death_chances, rng))
        .collect()
}
