//! Shared strategy contract.
//!
//! Every search strategy exposes the same capability set: establish a
//! starting state, advance one iteration, and report the best solution so
//! far. Seeding and device handling are not inherited from a base type;
//! each strategy owns a [`SearchContext`].

use crate::device::Device;
use crate::error::Result;
use crate::population::Representation;
use crate::random::{create_rng, SearchRng};
use crate::solution::Solution;
use crate::solve::{SearchRunner, SolveConfig, SolveResult};

/// Contract implemented by every iterative search strategy.
///
/// State machine: `initialize` moves the strategy from *uninitialized* to
/// *initialized*; every `step` call advances exactly one iteration. Calling
/// `step` before `initialize` fails with
/// [`SearchError::NotInitialized`](crate::SearchError::NotInitialized).
pub trait SearchStrategy {
    /// Representation type of candidate solutions.
    type Repr: Representation;

    /// Caller-supplied starting point accepted by [`initialize`](Self::initialize).
    type Start;

    /// Establishes the starting state, optionally from `start_at`.
    ///
    /// `start_at` is assumed to be feasible.
    fn initialize(&mut self, start_at: Option<Self::Start>) -> Result<()>;

    /// Advances the search by one iteration (generation).
    fn step(&mut self) -> Result<()>;

    /// Best solution found so far, `None` before initialization.
    fn best_sol(&self) -> Option<&Solution<Self::Repr>>;

    /// Optimization direction of the underlying problem.
    fn minimize(&self) -> bool;

    /// Initializes the strategy and iterates it to a stopping criterion.
    fn solve(
        &mut self,
        start_at: Option<Self::Start>,
        config: &SolveConfig,
    ) -> Result<SolveResult<Self::Repr>>
    where
        Self: Sized,
    {
        SearchRunner::run(self, start_at, config)
    }
}

/// Seed, device and random generator owned by one strategy instance.
#[derive(Debug, Clone)]
pub struct SearchContext {
    seed: u64,
    device: Device,
    rng: SearchRng,
}

impl SearchContext {
    /// Creates a context whose generator is seeded from `seed`.
    pub fn new(seed: u64, device: Device) -> Self {
        Self {
            seed,
            device,
            rng: create_rng(seed),
        }
    }

    /// Seed the generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Processing device tag.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// The instance-local generator.
    pub fn rng(&mut self) -> &mut SearchRng {
        &mut self.rng
    }

    /// Splits the context into the device tag and the generator so both
    /// can be passed to an operator at once.
    pub fn parts(&mut self) -> (&Device, &mut SearchRng) {
        (&self.device, &mut self.rng)
    }
}
