//! Solve driver.
//!
//! [`SearchRunner`] takes any [`SearchStrategy`](crate::SearchStrategy),
//! initializes it and iterates it until the generation budget is spent or
//! an early stopping criterion fires.
//!
//! # Stopping criteria
//!
//! - generation budget (`n_iter`)
//! - stagnation: no improvement larger than `tolerance` for
//!   `stagnation_limit` consecutive generations
//! - wall-clock time limit
//! - external cancellation flag

mod config;
mod runner;

pub use config::SolveConfig;
pub use runner::{SearchRunner, SolveResult, StopReason};
