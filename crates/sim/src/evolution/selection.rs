//! Fitness-based mate selection.
//!
//! Selection here is truncation selection: individuals are ranked by fitness
//! and the top fraction of the population forms the mating pool. Ranking is
//! stable, so equally fit individuals keep their original order: with a
//! neutral fitness table the pool is simply the oldest part of the
//! population, generation after generation.

use crate::genome::Individual;
use std::collections::HashMap;

/// Rank individuals by fitness, descending.
///
/// Fitness values are computed (and memoized) through
/// [`Individual::fitness`] with the given table. Returns the indices of the
/// individuals in ranked order. The sort is stable: ties preserve the
/// original population order.
pub fn rank_by_fitness(
    individuals: &mut [Individual],
    trait_fitnesses: &HashMap<String, f64>,
) -> Vec<usize> {
    let fitness_values: Vec<f64> = individuals
        .iter_mut()
        .map(|ind| ind.fitness(trait_fitnesses))
        .collect();

    let mut ranked: Vec<usize> = (0..individuals.len()).collect();
    ranked.sort_by(|&a, &b| fitness_values[b].total_cmp(&fitness_values[a]));
    ranked
}

/// Number of individuals admitted to the mating pool:
/// ⌊population_size × mating_fraction⌋, clamped to the population size.
pub fn mating_pool_size(population_size: usize, mating_fraction: f64) -> usize {
    let pool = (population_size as f64 * mating_fraction) as usize;
    pool.min(population_size)
}
