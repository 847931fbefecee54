use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = "experiment.json")]
    pub output: PathBuf,

    /// Species name
    #[arg(short = 'N', long, default_value = "Frog")]
    pub species: String,

    /// Trait (locus) names, comma separated
    #[arg(
        short = 't',
        long,
        value_delimiter = ',',
        default_value = "Crazy Color,Long Tongue,Green Eyes"
    )]
    pub traits: Vec<String>,

    /// Dominant-allele chance per trait, comma separated
    ///
    /// Defaults to 0.5 for every trait when omitted.
    #[arg(short = 'c', long, value_delimiter = ',')]
    pub chances: Option<Vec<f64>>,

    /// Initial population size
    #[arg(short = 'n', long, default_value = "1000")]
    pub population_size: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value = "10")]
    pub generations: usize,

    /// Offspring per mated pair per generation
    #[arg(long, default_value = "3")]
    pub litter_size: usize,

    /// Fraction of the population admitted to the mating pool
    #[arg(long, default_value = "0.5")]
    pub mating_fraction: f64,

    /// Death chance of an expressed trait, as TRAIT=CHANCE (repeatable)
    #[arg(long = "death-chance", value_name = "TRAIT=CHANCE")]
    pub death_chances: Vec<String>,

    /// Fitness contribution of an expressed trait, as TRAIT=FITNESS (repeatable)
    #[arg(long = "mating-fitness", value_name = "TRAIT=FITNESS")]
    pub mating_fitnesses: Vec<String>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}
