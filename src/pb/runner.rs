//! Population-based search strategy.

use super::config::PopulationConfig;
use crate::error::{Result, SearchError};
use crate::operators::{Initializer, Mutator};
use crate::population::{Population, PopulationKind};
use crate::problem::{solution_is_better, Problem};
use crate::search::{SearchContext, SearchStrategy};
use crate::solution::Solution;
use tracing::{debug, info, warn};

/// Population-based iterative search.
///
/// Holds a fixed-size population and the best individual found. Each
/// [`step`](SearchStrategy::step) mutates every individual once, replaces
/// the population wholesale and evaluates it in one batched call.
pub struct PopulationBased<P: Problem, I, M> {
    pub(crate) problem: P,
    pub(crate) initializer: I,
    pub(crate) mutator: M,
    pub(crate) config: PopulationConfig,
    pub(crate) kind: PopulationKind,
    pub(crate) ctx: SearchContext,
    pub(crate) pop: Option<Population<P::Repr>>,
    pub(crate) best_sol: Option<Solution<P::Repr>>,
}

impl<P, I, M> PopulationBased<P, I, M>
where
    P: Problem,
    I: Initializer<P::Space, P::Repr>,
    M: Mutator<P::Repr>,
{
    /// Creates a population-based search and seeds its generator.
    pub fn new(problem: P, initializer: I, mutator: M, config: PopulationConfig) -> Result<Self> {
        Self::with_kind(problem, initializer, mutator, config, PopulationKind::Generic)
    }

    pub(crate) fn with_kind(
        problem: P,
        initializer: I,
        mutator: M,
        config: PopulationConfig,
        kind: PopulationKind,
    ) -> Result<Self> {
        config.validate()?;
        let ctx = SearchContext::new(config.seed, config.device);
        Ok(Self {
            problem,
            initializer,
            mutator,
            config,
            kind,
            ctx,
            pop: None,
            best_sol: None,
        })
    }

    /// The problem instance being solved.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Active configuration.
    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Configured population size.
    pub fn pop_size(&self) -> usize {
        self.config.pop_size
    }

    /// Current population, `None` before initialization.
    pub fn population(&self) -> Option<&Population<P::Repr>> {
        self.pop.as_ref()
    }

    /// Builds the starting representation set: caller seeds first, then
    /// the remaining slots drawn from the initializer in one call.
    pub(crate) fn starting_representations(
        &mut self,
        start_at: Option<Vec<P::Repr>>,
    ) -> Result<Vec<P::Repr>> {
        let mut reprs = start_at.unwrap_or_default();
        self.config.validate_seeds(reprs.len())?;

        let seeded = reprs.len();
        let remaining = self.config.pop_size - seeded;
        if remaining > 0 {
            let (device, rng) = self.ctx.parts();
            let drawn = self
                .initializer
                .initialize(self.problem.space(), device, remaining, rng);
            if drawn.len() != remaining {
                return Err(SearchError::contract(
                    "initializer",
                    format!("requested {remaining} representations, got {}", drawn.len()),
                ));
            }
            reprs.extend(drawn);
        }

        debug!(seeded, drawn = remaining, "starting representations ready");
        Ok(reprs)
    }

    /// Installs a new population: builds the container, evaluates it in
    /// one batched call and sets `best_sol` to its best individual.
    pub(crate) fn set_pop(&mut self, reprs: Vec<P::Repr>) -> Result<()> {
        let mut pop = Population::with_kind(reprs, self.kind)?;
        self.problem.evaluate_pop(&mut pop)?;

        if pop.feasible_count() == 0 {
            warn!(size = pop.len(), "population contains no feasible individual");
        }

        self.best_sol = pop.get_best(self.problem.minimize());
        self.pop = Some(pop);
        Ok(())
    }

    /// Restores `previous` as `best_sol` if it beats the current one.
    pub(crate) fn keep_better(&mut self, previous: Option<Solution<P::Repr>>) {
        let minimize = self.problem.minimize();
        if let Some(prev) = previous {
            let replace = match &self.best_sol {
                Some(current) => solution_is_better(&prev, current, minimize),
                None => true,
            };
            if replace {
                self.best_sol = Some(prev);
            }
        }
    }
}

impl<P, I, M> SearchStrategy for PopulationBased<P, I, M>
where
    P: Problem,
    I: Initializer<P::Space, P::Repr>,
    M: Mutator<P::Repr>,
{
    type Repr = P::Repr;
    type Start = Vec<P::Repr>;

    fn initialize(&mut self, start_at: Option<Vec<P::Repr>>) -> Result<()> {
        let reprs = self.starting_representations(start_at)?;
        self.set_pop(reprs)?;
        info!(
            size = self.config.pop_size,
            best = self.best_sol.as_ref().map(|s| s.fitness),
            "population initialized"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        let pop = self.pop.as_ref().ok_or(SearchError::NotInitialized)?;

        let rng = self.ctx.rng();
        let offspring: Vec<P::Repr> = pop
            .individuals()
            .iter()
            .map(|repr| self.mutator.mutate(repr, rng))
            .collect();

        let previous = self.best_sol.take();
        if let Err(err) = self.set_pop(offspring) {
            self.best_sol = previous;
            return Err(err);
        }
        self.keep_better(previous);
        Ok(())
    }

    fn best_sol(&self) -> Option<&Solution<P::Repr>> {
        self.best_sol.as_ref()
    }

    fn minimize(&self) -> bool {
        self.problem.minimize()
    }
}
