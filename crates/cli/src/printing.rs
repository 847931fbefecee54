use traitevo_sim::simulation::ExperimentConfig;

pub fn print_parameters(config: &ExperimentConfig) {
    let species = &config.species;
    let selection = &config.selection;
    let mortality = &config.mortality;

    println!("\n📋 Experiment Configuration");
    println!("  • Species: {} [--species]", species.name);
    println!(
        "  • Population Size: {} [-n, --population-size]",
        species.count
    );
    println!("  • Generations: {} [-g, --generations]", config.generations);
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genome ({} loci)", species.traits.len());
    let default_chances = vec![0.5; species.traits.len()];
    let chances = species
        .dominant_allele_chances
        .as_ref()
        .unwrap_or(&default_chances);
    for (name, chance) in species.traits.iter().zip(chances) {
        println!("  • {name}: dominant-allele chance {chance}");
    }

    println!("\n❤️  Selection");
    println!("  • Litter Size: {} [--litter-size]", selection.litter_size);
    println!(
        "  • Mating Fraction: {} [--mating-fraction]",
        selection.mating_fraction
    );
    if selection.mating_fitnesses.is_empty() {
        println!("  • Fitness: Neutral (no trait contributions)");
    } else {
        let mut fitnesses: Vec<_> = selection.mating_fitnesses.iter().collect();
        fitnesses.sort_by(|a, b| a.0.cmp(b.0));
        for (name, fitness) in fitnesses {
            println!("  • Fitness {name}: {fitness:+}");
        }
    }

    println!("\n💀 Mortality");
    if mortality.death_chances.is_empty() {
        println!("  • None (no trait-linked death)");
    } else {
        let mut chances: Vec<_> = mortality.death_chances.iter().collect();
        chances.sort_by(|a, b| a.0.cmp(b.0));
        for (name, chance) in chances {
            println!("  • {name}: death chance {chance}");
        }
    }
}
