//! Integration tests for end-to-end simulation workflows.
//! Tests that simulate real-world usage patterns combining multiple modules.

use traitevo_sim::analysis::FrequencyTrajectory;
use traitevo_sim::genome::{Genome, Individual};
use traitevo_sim::simulation::{
    Environment, EnvironmentBuilder, MortalityConfig, Population, SelectionConfig,
};

#[test]
fn test_basic_simulation_workflow() {
    let mut env = EnvironmentBuilder::new()
        .species("Frog")
        .genome(["Crazy Color", "Long Tongue", "Green Eyes"])
        .dominant_chances([0.9, 0.5, 0.1])
        .population_size(200)
        .seed(42)
        .build()
        .unwrap();

    let mut trajectory = FrequencyTrajectory::new(vec![
        "Crazy Color".to_owned(),
        "Long Tongue".to_owned(),
        "Green Eyes".to_owned(),
    ]);

    for _ in 0..5 {
        env.fastforward(1).unwrap();
        trajectory.record(env.population()).unwrap();
    }

    assert_eq!(env.generation(), 5);
    assert_eq!(trajectory.len(), 5);
    for record in trajectory.records() {
        for frequency in record.values() {
            assert!((0.0..=1.0).contains(frequency));
        }
    }
}

#[test]
fn test_neutral_run_has_no_systematic_drift() {
    // 1000 individuals, single locus at chance 0.9, no death chances and no
    // fitness differential: frequencies should stay near 0.9 for 10
    // generations.
    let mut env = EnvironmentBuilder::new()
        .species("Frog")
        .genome(["Crazy Color"])
        .dominant_chances([0.9])
        .population_size(1000)
        .seed(42)
        .build()
        .unwrap();

    let mut trajectory = FrequencyTrajectory::new(vec!["Crazy Color".to_owned()]);
    trajectory.record(env.population()).unwrap();

    for _ in 0..10 {
        env.fastforward(1).unwrap();
        trajectory.record(env.population()).unwrap();
    }

    for record in trajectory.records() {
        let frequency = record["Crazy Color"];
        assert!(
            (frequency - 0.9).abs() < 0.05,
            "frequency drifted to {frequency}"
        );
    }
}

#[test]
fn test_fixed_alleles_stay_fixed() {
    // With chance 1.0 every allele is dominant; mating alone can never
    // reintroduce the recessive allele.
    let mut env = EnvironmentBuilder::new()
        .species("Frog")
        .genome(["a"])
        .dominant_chances([1.0])
        .population_size(100)
        .seed(7)
        .build()
        .unwrap();

    env.fastforward(5).unwrap();

    let freqs = env.population().allele_frequencies(&["a"]).unwrap();
    assert_eq!(freqs["a"], 1.0);

    // Symmetrically for a population fixed on the recessive allele.
    let mut env = EnvironmentBuilder::new()
        .species("Frog")
        .genome(["a"])
        .dominant_chances([0.0])
        .population_size(100)
        .seed(7)
        .build()
        .unwrap();

    env.fastforward(5).unwrap();

    let freqs = env.population().allele_frequencies(&["a"]).unwrap();
    assert_eq!(freqs["a"], 0.0);
}

#[test]
fn test_certain_death_purges_expressed_trait() {
    // Every individual expressing the lethal trait dies each generation;
    // after one step only dd genotypes remain.
    let mut env = EnvironmentBuilder::new()
        .species("Frog")
        .genome(["lethal"])
        .dominant_chances([0.5])
        .population_size(500)
        .death_chance("lethal", 1.0)
        .seed(42)
        .build()
        .unwrap();

    env.fastforward(1).unwrap();

    assert!(!env.population().is_empty());
    let freqs = env.population().allele_frequencies(&["lethal"]).unwrap();
    assert_eq!(freqs["lethal"], 0.0);
}

#[test]
fn test_selection_pressure_raises_frequency() {
    // A strongly favored trait should climb in frequency under truncation
    // selection.
    let mut env = EnvironmentBuilder::new()
        .species("Frog")
        .genome(["favored"])
        .dominant_chances([0.2])
        .population_size(400)
        .mating_fitness("favored", 10.0)
        .seed(42)
        .build()
        .unwrap();

    let start = env.population().allele_frequencies(&["favored"]).unwrap()["favored"];
    env.fastforward(8).unwrap();
    let end = env.population().allele_frequencies(&["favored"]).unwrap()["favored"];

    assert!(
        end > start,
        "expected selection to raise frequency: {start} -> {end}"
    );
}

#[test]
fn test_immigration_workflow() {
    // Seed a population externally, immigrate it into an environment's
    // population, and keep simulating.
    let mut rng = rand::rng();
    let genome = Genome::uniform(["a"]).unwrap();
    let newcomers: Vec<Individual> = (0..50)
        .map(|_| Individual::from_genome("Frog", &genome, &mut rng))
        .collect();

    let mut population = Population::empty();
    population.add_species("Frog", &genome, 50, &mut rng);
    population.immigrate(newcomers);
    assert_eq!(population.size(), 100);

    let mut env = Environment::new(
        population,
        SelectionConfig::neutral(),
        MortalityConfig::none(),
        Some(42),
    );
    env.fastforward(2).unwrap();

    assert_eq!(env.generation(), 2);
    assert!(env.population().size() > 100);
}

#[test]
fn test_reproducible_trajectories_with_same_seed() {
    let run = || {
        let mut env = EnvironmentBuilder::new()
            .species("Frog")
            .genome(["a", "b"])
            .dominant_chances([0.7, 0.3])
            .population_size(100)
            .death_chance("a", 0.1)
            .mating_fitness("b", 2.0)
            .seed(1234)
            .build()
            .unwrap();

        let mut trajectory =
            FrequencyTrajectory::new(vec!["a".to_owned(), "b".to_owned()]);
        for _ in 0..5 {
            env.fastforward(1).unwrap();
            trajectory.record(env.population()).unwrap();
        }
        trajectory
    };

    let first = run();
    let second = run();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.records().iter().zip(second.records()) {
        assert_eq!(a["a"], b["a"]);
        assert_eq!(a["b"], b["b"]);
    }
}
