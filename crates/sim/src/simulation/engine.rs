//! The environment driving the time evolution of a population.
//!
//! Each generation runs two phases in strict order: fitness-ranked mate
//! selection (offspring are appended, parents are retained) followed by
//! trait-linked death (marked individuals are removed in one sweep).

use crate::errors::MatingError;
use crate::evolution::{mortality, selection};
use crate::genome::Genome;
use crate::simulation::{EnvironmentBuilder, MortalityConfig, Population, SelectionConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A simulated environment applying selection and death to a population.
///
/// The environment exclusively owns its population and its random number
/// generator for the duration of a run. Seed the generator for reproducible
/// simulations.
#[derive(Debug)]
pub struct Environment {
    /// The population under simulation
    population: Population,
    /// Mate-selection parameters
    selection: SelectionConfig,
    /// Trait-linked death parameters
    mortality: MortalityConfig,
    /// Random number generator (Xoshiro256++ for speed and seedability)
    rng: Xoshiro256PlusPlus,
}

impl Environment {
    /// Create a new environment around an existing population.
    ///
    /// With `seed` absent, the generator is seeded from the operating
    /// system's entropy source.
    pub fn new(
        population: Population,
        selection: SelectionConfig,
        mortality: MortalityConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        Self {
            population,
            selection,
            mortality,
            rng,
        }
    }

    /// Start building an environment with the fluent API.
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get mutable access to the population.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Get reference to the mate-selection configuration.
    pub fn selection(&self) -> &SelectionConfig {
        &self.selection
    }

    /// Get reference to the mortality configuration.
    pub fn mortality(&self) -> &MortalityConfig {
        &self.mortality
    }

    /// Generate `count` fresh individuals of a species and add them to the
    /// population, drawing from the environment's own generator.
    pub fn add_species(&mut self, species: &str, genome: &Genome, count: usize) {
        self.population
            .add_species(species, genome, count, &mut self.rng);
    }

    /// Phase 1: fitness-ranked mate selection.
    ///
    /// Individuals are ranked by fitness (descending, stable on ties), the
    /// top ⌊N·mating_fraction⌋ form the mating pool in ranked order, and
    /// adjacent pool entries are paired: (0,1), (2,3), … An odd pool leaves
    /// its last individual unpaired; it simply produces no offspring. Each
    /// pair produces `litter_size` independently drawn offspring, which are
    /// appended to the population. Parents are not removed; death is
    /// phase 2's job, and there is no mating cooldown or age limit.
    ///
    /// Returns the number of offspring appended.
    ///
    /// # Errors
    /// Returns [`MatingError`] if a selected pair is incompatible, which
    /// indicates a caller-side setup bug (mixed species or mismatched
    /// genome layouts in one population). No offspring are appended in
    /// that case.
    pub fn select_and_mate(
        &mut self,
        litter_size: usize,
        mating_fraction: f64,
    ) -> Result<usize, MatingError> {
        let ranked = selection::rank_by_fitness(
            self.population.individuals_mut(),
            &self.selection.mating_fitnesses,
        );
        let pool_size = selection::mating_pool_size(self.population.size(), mating_fraction);
        let pool = &ranked[..pool_size];

        let mut offspring = Vec::with_capacity((pool_size / 2) * litter_size);
        for pair in pool.chunks_exact(2) {
            let parent1 = &self.population.individuals()[pair[0]];
            let parent2 = &self.population.individuals()[pair[1]];
            for _ in 0..litter_size {
                offspring.push(parent1.combine(parent2, &mut self.rng)?);
            }
        }

        let appended = offspring.len();
        self.population.immigrate(offspring);
        Ok(appended)
    }

    /// Phase 2: trait-linked death.
    ///
    /// Every individual runs one independent trial per expressed trait that
    /// has a configured death chance; any success marks it for removal.
    /// Marked individuals are removed in a single sweep, so an individual
    /// with several lethal traits is removed exactly once.
    ///
    /// Returns the number of individuals removed.
    pub fn apply_death(&mut self) -> usize {
        let doomed = mortality::mark_doomed(
            self.population.individuals(),
            &self.mortality.death_chances,
            &mut self.rng,
        );

        let removed = doomed.iter().filter(|&&dead| dead).count();
        if removed > 0 {
            let survivors = self
                .population
                .take_individuals()
                .into_iter()
                .zip(doomed)
                .filter(|&(_, dead)| !dead)
                .map(|(individual, _)| individual)
                .collect();
            self.population.set_individuals(survivors);
        }
        removed
    }

    /// Advance the simulation by one generation: mate selection with the
    /// configured litter size and mating fraction, then death, then the
    /// generation counter.
    pub fn step(&mut self) -> Result<(), MatingError> {
        let litter_size = self.selection.litter_size;
        let mating_fraction = self.selection.mating_fraction;

        self.select_and_mate(litter_size, mating_fraction)?;
        self.apply_death();
        self.population.increment_generation();
        Ok(())
    }

    /// Move forward a certain number of timesteps.
    ///
    /// Callers typically query [`Population::allele_frequencies`] between
    /// steps to collect per-generation statistics for reporting.
    pub fn fastforward(&mut self, timesteps: usize) -> Result<(), MatingError> {
        for _ in 0..timesteps {
            self.step()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Allele, Genotype};
    use crate::genome::{Gene, Individual};
    use std::collections::HashMap;

    const D: Allele = Allele::Dominant;
    const R: Allele = Allele::Recessive;

    fn uniform_population(count: usize) -> Population {
        let individuals = (0..count)
            .map(|_| Individual::new("Frog", vec![Gene::new("a", Genotype::new(D, R))]))
            .collect();
        Population::new(individuals)
    }

    fn neutral_environment(count: usize) -> Environment {
        Environment::new(
            uniform_population(count),
            SelectionConfig::neutral(),
            MortalityConfig::none(),
            Some(42),
        )
    }

    #[test]
    fn test_select_and_mate_offspring_count() {
        // Pool of 5 from 10, two pairs, litter 3 -> 6 offspring
        let mut env = neutral_environment(10);

        let appended = env.select_and_mate(3, 0.5).unwrap();

        assert_eq!(appended, 6);
        assert_eq!(env.population().size(), 16);
    }

    #[test]
    fn test_select_and_mate_keeps_parents() {
        let mut env = neutral_environment(4);
        env.select_and_mate(2, 1.0).unwrap();

        // 4 parents + 2 pairs x 2 offspring
        assert_eq!(env.population().size(), 8);
    }

    #[test]
    fn test_select_and_mate_single_individual_pool() {
        // Pool of 1 cannot form a pair; no offspring
        let mut env = neutral_environment(3);
        let appended = env.select_and_mate(3, 0.5).unwrap();

        assert_eq!(appended, 0);
        assert_eq!(env.population().size(), 3);
    }

    #[test]
    fn test_select_and_mate_empty_population() {
        let mut env = neutral_environment(0);
        let appended = env.select_and_mate(3, 0.5).unwrap();
        assert_eq!(appended, 0);
    }

    #[test]
    fn test_select_and_mate_ranks_by_fitness() {
        // Two fit individuals (expressed "fit") and two unfit; fraction 0.5
        // admits exactly the fit pair.
        let fit = Individual::new("Frog", vec![Gene::new("fit", Genotype::new(D, D))]);
        let unfit = Individual::new("Frog", vec![Gene::new("fit", Genotype::new(R, R))]);
        let population =
            Population::new(vec![unfit.clone(), fit.clone(), unfit, fit]);

        let mut fitnesses = HashMap::new();
        fitnesses.insert("fit".to_owned(), 1.0);
        let selection = SelectionConfig::new(fitnesses, 1, 0.5).unwrap();

        let mut env = Environment::new(population, selection, MortalityConfig::none(), Some(7));
        env.select_and_mate(1, 0.5).unwrap();

        // The single offspring comes from two DD parents
        let child = env.population().get(4).unwrap();
        assert_eq!(child.trait_genotype("fit"), Some(Genotype::new(D, D)));
    }

    #[test]
    fn test_apply_death_certain_for_expressed() {
        let expressed = Individual::new("Frog", vec![Gene::new("lethal", Genotype::new(D, R))]);
        let silent = Individual::new("Frog", vec![Gene::new("lethal", Genotype::new(R, R))]);
        let population = Population::new(vec![
            expressed.clone(),
            silent.clone(),
            expressed,
            silent,
        ]);

        let mut chances = HashMap::new();
        chances.insert("lethal".to_owned(), 1.0);
        let mortality = MortalityConfig::new(chances).unwrap();

        let mut env = Environment::new(
            population,
            SelectionConfig::neutral(),
            mortality,
            Some(42),
        );
        let removed = env.apply_death();

        assert_eq!(removed, 2);
        assert_eq!(env.population().size(), 2);
        for individual in env.population().individuals() {
            assert_eq!(
                individual.trait_genotype("lethal"),
                Some(Genotype::new(R, R))
            );
        }
    }

    #[test]
    fn test_apply_death_zero_chance_removes_nobody() {
        let mut chances = HashMap::new();
        chances.insert("a".to_owned(), 0.0);
        let mortality = MortalityConfig::new(chances).unwrap();

        let mut env = Environment::new(
            uniform_population(10),
            SelectionConfig::neutral(),
            mortality,
            Some(42),
        );

        assert_eq!(env.apply_death(), 0);
        assert_eq!(env.population().size(), 10);
    }

    #[test]
    fn test_step_increments_generation() {
        let mut env = neutral_environment(10);
        assert_eq!(env.generation(), 0);

        env.step().unwrap();
        assert_eq!(env.generation(), 1);
    }

    #[test]
    fn test_fastforward() {
        let mut env = neutral_environment(10);
        env.fastforward(5).unwrap();
        assert_eq!(env.generation(), 5);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut env = Environment::new(
                uniform_population(50),
                SelectionConfig::neutral(),
                MortalityConfig::none(),
                Some(seed),
            );
            env.fastforward(3).unwrap();
            env.population().allele_frequencies(&["a"]).unwrap()["a"]
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_mixed_species_mating_fails() {
        let frog = Individual::new("Frog", vec![Gene::new("a", Genotype::new(D, R))]);
        let toad = Individual::new("Toad", vec![Gene::new("a", Genotype::new(D, R))]);
        let population = Population::new(vec![frog, toad]);

        let mut env = Environment::new(
            population,
            SelectionConfig::neutral(),
            MortalityConfig::none(),
            Some(42),
        );

        assert!(env.select_and_mate(1, 1.0).is_err());
    }
}
