//! Random Search (RS).
//!
//! The baseline iterative stochastic search: sample the solution space at
//! random and keep the best feasible candidate seen. Every smarter strategy
//! in this crate can be read as an improvement on it.
//!
//! # Key Types
//!
//! - [`RandomSearchConfig`]: seed, device, feasibility retry cap
//! - [`RandomSearch`]: the strategy itself

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::RandomSearch;
