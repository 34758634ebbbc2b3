//! GA generational step.
//!
//! One [`step`](SearchStrategy::step) runs the four-stage pipeline:
//! selection → variation → elitism → replacement and batched evaluation.

use super::config::GaConfig;
use crate::error::{Result, SearchError};
use crate::operators::{Crossover, Initializer, Mutator, Selector};
use crate::pb::PopulationBased;
use crate::population::{Population, PopulationKind};
use crate::problem::Problem;
use crate::search::SearchStrategy;
use crate::solution::Solution;
use rand::Rng;
use tracing::debug;

/// Operator that produced one offspring slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variation {
    /// Two parents recombined.
    Crossover,
    /// First parent copied unchanged.
    Reproduction,
    /// First parent mutated.
    Mutation,
}

/// Origin of the individuals in the most recent generation.
///
/// Counts individuals, not operator calls: one crossover producing two
/// children adds two to `crossover`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariationStats {
    /// Elite carried over unchanged (0 or 1).
    pub elites: usize,
    /// Offspring produced by crossover.
    pub crossover: usize,
    /// Offspring copied by reproduction.
    pub reproduction: usize,
    /// Offspring produced by mutation.
    pub mutation: usize,
}

impl VariationStats {
    /// Total number of individuals accounted for.
    pub fn total(&self) -> usize {
        self.elites + self.crossover + self.reproduction + self.mutation
    }
}

/// Generational genetic algorithm.
///
/// # Usage
///
/// ```ignore
/// let mut ga = GeneticAlgorithm::new(
///     &problem,
///     RampedTrees::new(6),
///     Selection::Tournament(4),
///     SubtreeMutation,
///     SubtreeCrossover,
///     GaConfig::default().with_seed(42),
/// )?;
/// let result = ga.solve(None, &SolveConfig::default().with_n_iter(50))?;
/// println!("best fitness: {}", result.best.fitness);
/// ```
pub struct GeneticAlgorithm<P: Problem, I, S, M, C> {
    base: PopulationBased<P, I, M>,
    selector: S,
    crossover: C,
    config: GaConfig,
    generation_best: Option<Solution<P::Repr>>,
    last_variation: VariationStats,
}

impl<P, I, S, M, C> GeneticAlgorithm<P, I, S, M, C>
where
    P: Problem,
    I: Initializer<P::Space, P::Repr>,
    S: Selector<P::Repr>,
    M: Mutator<P::Repr>,
    C: Crossover<P::Repr>,
{
    /// Creates a genetic algorithm, validating the configuration and
    /// seeding its generator.
    pub fn new(
        problem: P,
        initializer: I,
        selector: S,
        mutator: M,
        crossover: C,
        config: GaConfig,
    ) -> Result<Self> {
        config.validate()?;
        let base = PopulationBased::with_kind(
            problem,
            initializer,
            mutator,
            config.population(),
            PopulationKind::Tree,
        )?;
        Ok(Self {
            base,
            selector,
            crossover,
            config,
            generation_best: None,
            last_variation: VariationStats::default(),
        })
    }

    /// The problem instance being solved.
    pub fn problem(&self) -> &P {
        self.base.problem()
    }

    /// Active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Current population, `None` before initialization.
    pub fn population(&self) -> Option<&Population<P::Repr>> {
        self.base.population()
    }

    /// Best individual of the current population only.
    ///
    /// Without elitism this can be worse than [`best_sol`](SearchStrategy::best_sol),
    /// which remembers the best individual of any generation.
    pub fn generation_best(&self) -> Option<&Solution<P::Repr>> {
        self.generation_best.as_ref()
    }

    /// Offspring origin of the most recent generation.
    pub fn last_variation(&self) -> VariationStats {
        self.last_variation
    }

    /// Breeds the next generation's representations.
    fn breed(&mut self) -> Result<(Vec<P::Repr>, VariationStats)> {
        let pop_size = self.config.pop_size;
        let minimize = self.base.problem.minimize();
        let base = &mut self.base;
        let pop = base.pop.as_ref().ok_or(SearchError::NotInitialized)?;

        let mut next: Vec<P::Repr> = Vec::with_capacity(pop_size);
        let mut stats = VariationStats::default();

        if self.config.elitism {
            if let Some(best) = &base.best_sol {
                next.push(best.repr.clone());
                stats.elites = 1;
            }
        }

        while next.len() < pop_size {
            let rng = base.ctx.rng();
            let p1 = select_parent(&self.selector, pop, minimize, rng)?;
            let p2 = select_parent(&self.selector, pop, minimize, rng)?;
            let parents = pop.individuals();

            match choose_variation(&self.config, rng) {
                Variation::Crossover => {
                    let children = self.crossover.crossover(&parents[p1], &parents[p2], rng);
                    if children.is_empty() || children.len() > 2 {
                        return Err(SearchError::contract(
                            "crossover",
                            format!("expected 1 or 2 offspring, got {}", children.len()),
                        ));
                    }
                    for child in children.into_iter().take(pop_size - next.len()) {
                        next.push(child);
                        stats.crossover += 1;
                    }
                }
                Variation::Reproduction => {
                    next.push(parents[p1].clone());
                    stats.reproduction += 1;
                }
                Variation::Mutation => {
                    next.push(base.mutator.mutate(&parents[p1], rng));
                    stats.mutation += 1;
                }
            }
        }

        Ok((next, stats))
    }
}

/// Draws which operator fills the next offspring slot.
fn choose_variation<G: Rng>(config: &GaConfig, rng: &mut G) -> Variation {
    let u: f64 = rng.random();
    if u < config.p_c {
        Variation::Crossover
    } else if config.reproduction {
        Variation::Reproduction
    } else {
        Variation::Mutation
    }
}

fn select_parent<R, S: Selector<R>, G: Rng>(
    selector: &S,
    pop: &Population<R>,
    minimize: bool,
    rng: &mut G,
) -> Result<usize> {
    let idx = selector.select(pop, minimize, rng);
    if idx >= pop.len() {
        return Err(SearchError::contract(
            "selector",
            format!("index {idx} out of range for population of {}", pop.len()),
        ));
    }
    Ok(idx)
}

impl<P, I, S, M, C> SearchStrategy for GeneticAlgorithm<P, I, S, M, C>
where
    P: Problem,
    I: Initializer<P::Space, P::Repr>,
    S: Selector<P::Repr>,
    M: Mutator<P::Repr>,
    C: Crossover<P::Repr>,
{
    type Repr = P::Repr;
    type Start = Vec<P::Repr>;

    fn initialize(&mut self, start_at: Option<Vec<P::Repr>>) -> Result<()> {
        self.base.initialize(start_at)?;
        self.generation_best = self.base.best_sol.clone();
        self.last_variation = VariationStats::default();
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        let (next, stats) = self.breed()?;

        let previous = self.base.best_sol.take();
        if let Err(err) = self.base.set_pop(next) {
            self.base.best_sol = previous;
            return Err(err);
        }
        self.generation_best = self.base.best_sol.clone();
        self.base.keep_better(previous);
        self.last_variation = stats;

        debug!(
            crossover = stats.crossover,
            reproduction = stats.reproduction,
            mutation = stats.mutation,
            elites = stats.elites,
            generation_best = self.generation_best.as_ref().map(|s| s.fitness),
            "generation bred"
        );
        Ok(())
    }

    fn best_sol(&self) -> Option<&Solution<P::Repr>> {
        self.base.best_sol.as_ref()
    }

    fn minimize(&self) -> bool {
        self.base.problem.minimize()
    }
}

// ============================================================================
// Tests
// ============================================================================
