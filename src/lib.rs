//! Iterative stochastic search framework.
//!
//! A small family of problem-agnostic search strategies built one on top of
//! the other:
//!
//! - **Random Search (RS)**: sample the solution space, keep the best
//!   feasible candidate.
//! - **Population-Based search (PB)**: maintain a fixed-size population,
//!   evaluated in one batched call per generation.
//! - **Genetic Algorithm (GA)**: generational evolution over a tree
//!   population with pluggable selection, crossover and mutation.
//!
//! # Architecture
//!
//! The user supplies a [`Problem`] (solution space, optimization direction,
//! evaluator) and the operators ([`Initializer`], [`Selector`], [`Mutator`],
//! [`Crossover`]). Strategies own their seeded random generator through a
//! [`SearchContext`] and expose the common [`SearchStrategy`] contract;
//! [`SearchRunner`] drives any of them to a stopping criterion.
//!
//! # Example
//!
//! ```ignore
//! use u_isa::{ga::{GaConfig, GeneticAlgorithm}, Selection, SearchStrategy, SolveConfig};
//!
//! let mut ga = GeneticAlgorithm::new(
//!     &problem,
//!     RandomTrees,
//!     Selection::Tournament(3),
//!     PointMutation,
//!     SubtreeCrossover,
//!     GaConfig::default().with_seed(7),
//! )?;
//! let result = ga.solve(None, &SolveConfig::default().with_n_iter(100))?;
//! ```

pub mod device;
pub mod error;
pub mod ga;
pub mod operators;
pub mod pb;
pub mod population;
pub mod problem;
pub mod random;
pub mod rs;
pub mod search;
pub mod solution;
pub mod solve;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use device::Device;
pub use error::{EvalError, Result, SearchError};
pub use operators::{Crossover, Initializer, Mutator, Selection, Selector};
pub use population::{Batch, Population, PopulationKind, PopulationTree, Representation, Shape};
pub use problem::{compare_fitness, is_better, Problem};
pub use search::{SearchContext, SearchStrategy};
pub use solution::Solution;
pub use solve::{SearchRunner, SolveConfig, SolveResult, StopReason};
pub use tree::Tree;
