//! Aggregate statistics collected for reporting.
//!
//! The simulation core exposes per-generation allele frequencies; this
//! module collects them into time series. Rendering (tables, charts) is the
//! job of external consumers such as the CLI.

mod frequencies;

pub use frequencies::FrequencyTrajectory;
