//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for the trait evolution
//! simulation. It includes modules for defining diploid genes and species
//! genomes, managing populations, executing the per-generation operators
//! (mate selection and trait-linked death), and running the environment
//! engine.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod simulation;
pub mod prelude;

pub use base::{Allele, Genotype, Zygosity};
