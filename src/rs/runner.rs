//! Random search strategy.

use super::config::RandomSearchConfig;
use crate::error::{Result, SearchError};
use crate::operators::Initializer;
use crate::problem::{solution_is_better, Problem};
use crate::search::{SearchContext, SearchStrategy};
use crate::solution::Solution;
use tracing::{debug, info};

/// Single-point stochastic search.
///
/// Initialization finds a feasible starting point, either supplied by the
/// caller or drawn at random. Each [`step`](SearchStrategy::step) draws one
/// more random solution and keeps it if it is feasible and strictly better.
///
/// Two instances built with the same seed, problem and initializer draw
/// identical sequences of representations.
///
/// # Examples
///
/// ```ignore
/// let mut rs = RandomSearch::new(&problem, initializer, RandomSearchConfig::default())?;
/// let result = rs.solve(None, &SolveConfig::default().with_n_iter(1000))?;
/// println!("best fitness: {}", result.best.fitness);
/// ```
pub struct RandomSearch<P: Problem, I> {
    problem: P,
    initializer: I,
    config: RandomSearchConfig,
    ctx: SearchContext,
    best_sol: Option<Solution<P::Repr>>,
}

impl<P, I> RandomSearch<P, I>
where
    P: Problem,
    I: Initializer<P::Space, P::Repr>,
{
    /// Creates a random search and seeds its generator.
    pub fn new(problem: P, initializer: I, config: RandomSearchConfig) -> Result<Self> {
        config.validate()?;
        let ctx = SearchContext::new(config.seed, config.device);
        Ok(Self {
            problem,
            initializer,
            config,
            ctx,
            best_sol: None,
        })
    }

    /// The problem instance being solved.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Active configuration.
    pub fn config(&self) -> &RandomSearchConfig {
        &self.config
    }

    /// Samples and evaluates one random solution.
    ///
    /// Feasibility is not checked; that is the caller's job.
    pub fn draw_random_solution(&mut self) -> Result<Solution<P::Repr>> {
        let (device, rng) = self.ctx.parts();
        let mut reprs = self
            .initializer
            .initialize(self.problem.space(), device, 1, rng);
        if reprs.len() != 1 {
            return Err(SearchError::contract(
                "initializer",
                format!("requested 1 representation, got {}", reprs.len()),
            ));
        }

        let mut sol = Solution::new(reprs.swap_remove(0));
        self.problem.evaluate_sol(&mut sol)?;
        Ok(sol)
    }
}

impl<P, I> SearchStrategy for RandomSearch<P, I>
where
    P: Problem,
    I: Initializer<P::Space, P::Repr>,
{
    type Repr = P::Repr;
    type Start = P::Repr;

    fn initialize(&mut self, start_at: Option<P::Repr>) -> Result<()> {
        self.best_sol = None;

        if let Some(repr) = start_at {
            let mut sol = Solution::new(repr);
            self.problem.evaluate_sol(&mut sol)?;
            info!(fitness = sol.fitness, "random search started from supplied point");
            self.best_sol = Some(sol);
            return Ok(());
        }

        let attempts = self.config.max_init_attempts;
        for attempt in 1..=attempts {
            let sol = self.draw_random_solution()?;
            if sol.valid {
                info!(
                    attempt,
                    fitness = sol.fitness,
                    "random search found feasible starting point"
                );
                self.best_sol = Some(sol);
                return Ok(());
            }
            debug!(attempt, "discarding infeasible random draw");
        }

        Err(SearchError::InitializationFailed { attempts })
    }

    fn step(&mut self) -> Result<()> {
        if self.best_sol.is_none() {
            return Err(SearchError::NotInitialized);
        }

        let candidate = self.draw_random_solution()?;
        let minimize = self.problem.minimize();
        let improved = match &self.best_sol {
            Some(best) => candidate.valid && solution_is_better(&candidate, best, minimize),
            None => false,
        };
        if improved {
            debug!(fitness = candidate.fitness, "random search improved");
            self.best_sol = Some(candidate);
        }
        Ok(())
    }

    fn best_sol(&self) -> Option<&Solution<P::Repr>> {
        self.best_sol.as_ref()
    }

    fn minimize(&self) -> bool {
        self.problem.minimize()
    }
}
