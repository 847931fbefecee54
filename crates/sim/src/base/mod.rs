//! Basic value types for diploid genetics.

mod allele;
mod genotype;

pub use allele::Allele;
pub use genotype::{Genotype, Zygosity};
