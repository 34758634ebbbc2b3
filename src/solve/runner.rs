//! Solve loop.

use super::config::SolveConfig;
use crate::error::{Result, SearchError};
use crate::search::SearchStrategy;
use crate::solution::Solution;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Why a solve run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The generation budget was spent.
    Budget,
    /// No improvement for `stagnation_limit` generations.
    Stagnation,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a solve run.
#[derive(Debug, Clone)]
pub struct SolveResult<R> {
    /// Best solution found.
    pub best: Solution<R>,

    /// Number of generations executed after initialization.
    pub generations: usize,

    /// Criterion that ended the run.
    pub stop_reason: StopReason,

    /// Best fitness after initialization, then after each generation.
    pub fitness_history: Vec<f64>,

    /// Wall-clock time spent, initialization included.
    pub elapsed: Duration,
}

/// Drives a [`SearchStrategy`] to a stopping criterion.
pub struct SearchRunner;

impl SearchRunner {
    /// Initializes `strategy` and iterates it.
    pub fn run<S: SearchStrategy>(
        strategy: &mut S,
        start_at: Option<S::Start>,
        config: &SolveConfig,
    ) -> Result<SolveResult<S::Repr>> {
        Self::run_with_cancel(strategy, start_at, config, None)
    }

    /// Initializes `strategy` and iterates it, checking `cancel` before
    /// every generation.
    #[instrument(skip_all, fields(n_iter = config.n_iter))]
    pub fn run_with_cancel<S: SearchStrategy>(
        strategy: &mut S,
        start_at: Option<S::Start>,
        config: &SolveConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveResult<S::Repr>> {
        config.validate()?;
        let start = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        let minimize = strategy.minimize();

        strategy.initialize(start_at)?;
        let mut previous = current_best(strategy)?.clone();
        let mut fitness_history = vec![previous.fitness];

        let mut generations = 0usize;
        let mut stagnant = 0usize;
        let mut stop_reason = StopReason::Budget;

        while generations < config.n_iter {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    stop_reason = StopReason::Cancelled;
                    break;
                }
            }
            if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                stop_reason = StopReason::TimeLimit;
                break;
            }

            strategy.step()?;
            generations += 1;

            let best = current_best(strategy)?;
            fitness_history.push(best.fitness);
            debug!(generation = generations, best = best.fitness, "generation done");

            if improved(&previous, best, minimize, config.tolerance) {
                stagnant = 0;
            } else {
                stagnant += 1;
            }
            previous = best.clone();

            if config.stagnation_limit > 0 && stagnant >= config.stagnation_limit {
                stop_reason = StopReason::Stagnation;
                break;
            }
        }

        let best = current_best(strategy)?.clone();
        info!(
            generations,
            ?stop_reason,
            best = best.fitness,
            valid = best.valid,
            "search finished"
        );

        Ok(SolveResult {
            best,
            generations,
            stop_reason,
            fitness_history,
            elapsed: start.elapsed(),
        })
    }
}

fn current_best<S: SearchStrategy>(strategy: &S) -> Result<&Solution<S::Repr>> {
    strategy.best_sol().ok_or(SearchError::NotInitialized)
}

/// Whether `current` beats `previous` by more than `tolerance`, or turned
/// feasible.
fn improved<R>(
    previous: &Solution<R>,
    current: &Solution<R>,
    minimize: bool,
    tolerance: f64,
) -> bool {
    if current.valid && !previous.valid {
        return true;
    }
    let gain = if minimize {
        previous.fitness - current.fitness
    } else {
        current.fitness - previous.fitness
    };
    if gain.is_nan() {
        return previous.fitness.is_nan() && !current.fitness.is_nan();
    }
    gain > tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaConfig, GeneticAlgorithm};
    use crate::operators::Selection;
    use crate::pb::{PopulationBased, PopulationConfig};
    use crate::rs::{RandomSearch, RandomSearchConfig};
    use crate::test_support::{Blend, Cycle, FirstElement, Jitter, Shift, Sphere, Uniform};

    fn assert_non_increasing(history: &[f64]) {
        for w in history.windows(2) {
            assert!(w[1] <= w[0], "history went up: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_budget_exhausted() {
        let problem = Sphere::new(3);
        let mut rs =
            RandomSearch::new(&problem, Uniform, RandomSearchConfig::default().with_seed(1))
                .unwrap();
        let result = SearchRunner::run(&mut rs, None, &SolveConfig::default().with_n_iter(10))
            .unwrap();

        assert_eq!(result.stop_reason, StopReason::Budget);
        assert_eq!(result.generations, 10);
        assert_eq!(result.fitness_history.len(), 11);
        assert_non_increasing(&result.fitness_history);
        assert_eq!(result.best.fitness, *result.fitness_history.last().unwrap());
        assert!(result.best.valid);
    }

    #[test]
    fn test_stagnation_stops_early() {
        let problem = FirstElement::minimize();
        let mut pb = PopulationBased::new(
            &problem,
            Cycle::new(4),
            Shift(1.0),
            PopulationConfig::default().with_pop_size(4),
        )
        .unwrap();
        let config = SolveConfig::default()
            .with_n_iter(50)
            .with_stagnation_limit(3);
        let result = SearchRunner::run(&mut pb, None, &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert_eq!(result.generations, 3);
        assert_eq!(result.best.fitness, 1.0);
    }

    #[test]
    fn test_gain_within_tolerance_is_stagnation() {
        let problem = FirstElement::minimize();
        let mut pb = PopulationBased::new(
            &problem,
            Cycle::new(4),
            Shift(-1.0),
            PopulationConfig::default().with_pop_size(4),
        )
        .unwrap();
        let config = SolveConfig::default()
            .with_n_iter(50)
            .with_tolerance(1.5)
            .with_stagnation_limit(2);
        let result = SearchRunner::run(&mut pb, None, &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert_eq!(result.generations, 2);
        assert_eq!(result.fitness_history, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_cancel_before_first_generation() {
        let problem = Sphere::new(2);
        let mut rs = RandomSearch::new(&problem, Uniform, RandomSearchConfig::default()).unwrap();

        // Raised before the run: the first check fires deterministically.
        let cancel = Arc::new(AtomicBool::new(true));
        let result = SearchRunner::run_with_cancel(
            &mut rs,
            None,
            &SolveConfig::default().with_n_iter(1_000),
            Some(cancel),
        )
        .unwrap();

        assert_eq!(result.stop_reason, StopReason::Cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_zero_time_limit() {
        let problem = Sphere::new(2);
        let mut rs = RandomSearch::new(&problem, Uniform, RandomSearchConfig::default()).unwrap();
        let config = SolveConfig::default()
            .with_n_iter(1_000)
            .with_time_limit_ms(0);
        let result = SearchRunner::run(&mut rs, None, &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::TimeLimit);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_invalid_config_leaves_strategy_untouched() {
        let problem = Sphere::new(2);
        let mut rs = RandomSearch::new(&problem, Uniform, RandomSearchConfig::default()).unwrap();
        let err = SearchRunner::run(&mut rs, None, &SolveConfig::default().with_n_iter(0))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
        assert!(rs.best_sol().is_none());
    }

    #[test]
    fn test_solve_through_trait() {
        let problem = Sphere::new(4);
        let mut ga = GeneticAlgorithm::new(
            &problem,
            Uniform,
            Selection::Tournament(3),
            Jitter(0.5),
            Blend,
            GaConfig::default().with_pop_size(30).with_seed(11),
        )
        .unwrap();
        let result = ga
            .solve(None, &SolveConfig::default().with_n_iter(40))
            .unwrap();

        assert_eq!(result.generations, 40);
        assert_non_increasing(&result.fitness_history);
        assert!(result.best.fitness < result.fitness_history[0]);
        assert_eq!(Some(&result.best), ga.best_sol());
    }

    #[test]
    fn test_improved_rules() {
        let sol = |f: f64, v: bool| Solution::evaluated((), f, v);
        assert!(improved(&sol(2.0, true), &sol(1.0, true), true, 0.0));
        assert!(!improved(&sol(2.0, true), &sol(2.0, true), true, 0.0));
        assert!(!improved(&sol(2.0, true), &sol(1.5, true), true, 0.5));
        assert!(improved(&sol(1.0, true), &sol(2.0, true), false, 0.0));
        assert!(improved(&sol(5.0, false), &sol(5.0, true), true, 0.0));
        assert!(improved(&sol(f64::NAN, true), &sol(3.0, true), true, 0.0));
        assert!(!improved(&sol(3.0, true), &sol(f64::NAN, true), true, 0.0));
    }
}
