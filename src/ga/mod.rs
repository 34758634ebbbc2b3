//! Genetic Algorithm framework.
//!
//! Canonical generational evolution on top of [`crate::pb`]: parents are
//! picked with a [`Selector`](crate::Selector), bred with
//! [`Crossover`](crate::Crossover), [`Mutator`](crate::Mutator) or plain
//! reproduction, and the offspring population replaces the parents
//! wholesale. Individuals live in a tree population
//! ([`Population::tree`](crate::Population::tree)) since GA individuals are
//! typically program or expression trees.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, `p_c`, `p_m`, elitism, reproduction
//! - [`GeneticAlgorithm`]: the strategy
//! - [`VariationStats`]: where the offspring of the last generation came from
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Koza (1992), *Genetic Programming*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{GeneticAlgorithm, Variation, VariationStats};
