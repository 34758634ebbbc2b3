//! Population-based search (PB).
//!
//! Generalizes random search from one point to a whole population: the
//! population is built (optionally seeded with caller-supplied
//! individuals), evaluated in one batched call, and the best individual is
//! tracked across it. Each step moves every individual once with the
//! mutation operator.
//!
//! The genetic algorithm in [`crate::ga`] is built on top of this module.

mod config;
mod runner;

pub use config::PopulationConfig;
pub use runner::PopulationBased;
