mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::InitArgs;
use commands::{init, run, show};

/// Traitevo: A Mendelian Trait Evolution Simulator
///
/// This tool simulates how diploid trait frequencies change in a population
/// over time due to fitness-based mate selection and trait-linked death.
#[derive(Parser, Debug)]
#[command(name = "traitevo")]
#[command(author, version, about = "Simulates the evolution of diploid traits over generations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new experiment configuration.
    ///
    /// Writes the parameters for a new experiment (species, traits, death
    /// chances, etc.) as a JSON file but does not run it yet.
    Init(Box<InitArgs>),

    /// Run an experiment.
    ///
    /// Executes the simulation generation by generation and exports the
    /// allele-frequency trajectory.
    Run {
        /// Experiment configuration path
        #[arg(short, long, default_value = "experiment.json")]
        config: PathBuf,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override random seed (default: use configured seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Show progress bar
        #[arg(long, default_value = "true")]
        progress: bool,
    },

    /// Show the initial population of an experiment.
    ///
    /// Prints a sample of individuals and the genotype counts per trait.
    Show {
        /// Experiment configuration path
        #[arg(short, long, default_value = "experiment.json")]
        config: PathBuf,

        /// Maximum number of individuals to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => {
            init::init_experiment(&args)?;
        }
        Commands::Run {
            config,
            format,
            output,
            seed,
            progress,
        } => {
            run::run_experiment(&config, &format, output.as_ref(), seed, progress)?;
        }
        Commands::Show { config, limit } => {
            show::show_population(&config, limit)?;
        }
    }

    Ok(())
}
