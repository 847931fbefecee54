//! Per-generation evolutionary operators: selection and trait-linked death.

pub mod mortality;
pub mod selection;

pub use mortality::mark_doomed;
pub use selection::{mating_pool_size, rank_by_fitness};
