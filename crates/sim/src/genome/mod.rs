//! Genome structures for representing genes, species genomes, and individuals.

mod gene;
mod genome_spec;
mod individual;

pub use gene::Gene;
pub use genome_spec::{Genome, Locus};
pub use individual::Individual;
