use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use traitevo_sim::analysis::FrequencyTrajectory;
use traitevo_sim::simulation::{Environment, ExperimentConfig, Population};

use crate::printing::print_parameters;

pub fn run_experiment(
    config_path: &PathBuf,
    format: &str,
    output: Option<&PathBuf>,
    seed_override: Option<u64>,
    show_progress: bool,
) -> Result<()> {
    println!("🧬 Traitevo - Running Simulation");
    println!("============================================");

    let raw = fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read {}. Did you run 'traitevo init' first?",
            config_path.display()
        )
    })?;
    let mut config =
        ExperimentConfig::from_json(&raw).context("Failed to parse experiment configuration")?;
    config
        .validate()
        .context("Invalid experiment configuration")?;

    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }

    let genome = config.species.genome().context("Invalid species genome")?;

    let mut env = Environment::new(
        Population::empty(),
        config.selection.clone(),
        config.mortality.clone(),
        config.seed,
    );
    env.add_species(&config.species.name, &genome, config.species.count);

    print_parameters(&config);

    println!("\nRunning {} generations...", config.generations);

    let pb = if show_progress {
        let pb = ProgressBar::new(config.generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut trajectory = FrequencyTrajectory::new(config.species.traits.clone());
    for generation in 1..=config.generations {
        env.fastforward(1)
            .map_err(|e| anyhow::anyhow!("Generation {generation}: {e}"))?;
        trajectory
            .record(env.population())
            .with_context(|| format!("Failed to record generation {generation}"))?;

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let rendered = match format {
        "csv" => render_csv(&trajectory),
        "json" => serde_json::to_string_pretty(&trajectory)
            .context("Failed to serialize trajectory")?,
        other => anyhow::bail!("Unknown output format: '{other}' (expected csv or json)"),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("\n✓ Simulation complete!");
            println!("  Final generation: {}", env.generation());
            println!("  Final population size: {}", env.population().size());
            println!("  Frequencies written to {}", path.display());
        }
        None => {
            println!("\n✓ Simulation complete!");
            println!("  Final generation: {}", env.generation());
            println!("  Final population size: {}", env.population().size());
            println!("\n{rendered}");
        }
    }

    Ok(())
}

/// Render the trajectory as wide CSV: one row per generation, one column
/// per trait.
fn render_csv(trajectory: &FrequencyTrajectory) -> String {
    let mut csv = String::from("generation");
    for name in trajectory.trait_names() {
        csv.push(',');
        csv.push_str(name);
    }
    csv.push('\n');

    for (index, record) in trajectory.records().iter().enumerate() {
        csv.push_str(&(index + 1).to_string());
        for name in trajectory.trait_names() {
            csv.push(',');
            csv.push_str(&record[name].to_string());
        }
        csv.push('\n');
    }
    csv
}
