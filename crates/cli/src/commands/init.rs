use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;

use traitevo_sim::simulation::{
    ExperimentConfig, MortalityConfig, SelectionConfig, SpeciesConfig,
};

use crate::args::InitArgs;
use crate::printing::print_parameters;

/// Parse repeatable `TRAIT=VALUE` arguments into a map.
fn parse_trait_values(pairs: &[String], flag: &str) -> Result<HashMap<String, f64>> {
    let mut values = HashMap::new();
    for pair in pairs {
        let (trait_name, value) = pair
            .split_once('=')
            .with_context(|| format!("Expected TRAIT=VALUE for {flag}, got '{pair}'"))?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("Invalid number in {flag}: '{pair}'"))?;
        values.insert(trait_name.to_owned(), value);
    }
    Ok(values)
}

pub fn init_experiment(args: &InitArgs) -> Result<()> {
    println!("🧬 Traitevo - New Experiment");
    println!("============================================");

    let selection = SelectionConfig::new(
        parse_trait_values(&args.mating_fitnesses, "--mating-fitness")?,
        args.litter_size,
        args.mating_fraction,
    )
    .context("Invalid selection parameters")?;

    let mortality = MortalityConfig::new(parse_trait_values(&args.death_chances, "--death-chance")?)
        .context("Invalid death chances")?;

    let config = ExperimentConfig {
        species: SpeciesConfig {
            name: args.species.clone(),
            traits: args.traits.clone(),
            dominant_allele_chances: args.chances.clone(),
            count: args.population_size,
        },
        generations: args.generations,
        selection,
        mortality,
        seed: args.seed,
    };

    // Surface genome problems (length mismatch, bad chances) before writing
    config
        .species
        .genome()
        .context("Invalid species genome")?;

    let json = config
        .to_json_pretty()
        .context("Failed to serialize configuration")?;
    fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_parameters(&config);

    println!("\n✓ Experiment configuration written successfully!");
    println!(
        "\n💡 Use 'traitevo run -c {}' to run the experiment",
        args.output.display()
    );

    Ok(())
}
