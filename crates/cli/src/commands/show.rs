use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use traitevo_sim::simulation::{Environment, ExperimentConfig, Population};

pub fn show_population(config_path: &PathBuf, limit: usize) -> Result<()> {
    println!("🧬 Traitevo - Initial Population");
    println!("============================================");

    let raw = fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read {}. Did you run 'traitevo init' first?",
            config_path.display()
        )
    })?;
    let config =
        ExperimentConfig::from_json(&raw).context("Failed to parse experiment configuration")?;
    let genome = config.species.genome().context("Invalid species genome")?;

    let mut env = Environment::new(
        Population::empty(),
        config.selection.clone(),
        config.mortality.clone(),
        config.seed,
    );
    env.add_species(&config.species.name, &genome, config.species.count);
    let population = env.population();

    println!(
        "\nSpecies: {} ({} individuals)",
        config.species.name,
        population.size()
    );

    let shown = population.size().min(limit);
    for individual in &population.individuals()[..shown] {
        println!("{individual}");
    }
    if shown < population.size() {
        println!("... and {} more", population.size() - shown);
    }

    println!("\n📊 Genotype Counts");
    for trait_name in &config.species.traits {
        let counts = population
            .genotype_counts(trait_name)
            .with_context(|| format!("Failed to count genotypes for '{trait_name}'"))?;
        println!(
            "  • {trait_name}: {} DD / {} Dd / {} dd (allele frequency {:.3})",
            counts.homozygous_dominant,
            counts.heterozygous,
            counts.homozygous_recessive,
            counts.allele_frequency()
        );
    }

    Ok(())
}
