//! Built-in parent selection strategies.
//!
//! Selection determines which individuals are chosen as parents for
//! variation. Different strategies provide different selection pressure.
//! Every strategy honours the problem's `minimize` flag and ranks
//! infeasible individuals and `NaN` fitness last.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::Selector;
use crate::population::Population;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_isa::{Population, Selection, Selector};
/// use u_isa::random::create_rng;
///
/// let mut pop = Population::new(vec![vec![3.0], vec![1.0], vec![2.0]]).unwrap();
/// for i in 0..pop.len() {
///     let f = pop.individuals()[i][0];
///     pop.set_evaluation(i, f, true);
/// }
///
/// let mut rng = create_rng(0);
/// // Tournament over the whole population with many rounds picks the best.
/// let idx = Selection::Tournament(64).select(&pop, true, &mut rng);
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: pick `k` individuals at random, keep the best.
    ///
    /// Higher `k` = stronger selection pressure. `Tournament(0)` behaves as
    /// `Tournament(1)`, a uniform random pick.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Uses the distance to the worst feasible fitness as weight, so it
    /// works for both optimization directions.
    Roulette,

    /// Linear rank selection: weight of rank `r` (best = 0) is `n - r`.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl<R> Selector<R> for Selection {
    /// # Panics
    /// Panics if `population` is empty.
    fn select<G: Rng>(&self, population: &Population<R>, minimize: bool, rng: &mut G) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let keys = selection_keys(population, minimize);
        match self {
            Selection::Tournament(k) => tournament(&keys, *k, rng),
            Selection::Roulette => roulette(&keys, rng),
            Selection::Rank => rank(&keys, rng),
        }
    }
}

/// Maps every individual to a "lower is better" key.
fn selection_keys<R>(population: &Population<R>, minimize: bool) -> Vec<f64> {
    population
        .fitness()
        .iter()
        .zip(population.valid())
        .map(|(&f, &valid)| {
            if !valid || f.is_nan() {
                f64::INFINITY
            } else if minimize {
                f
            } else {
                -f
            }
        })
        .collect()
}

fn tournament<G: Rng>(keys: &[f64], k: usize, rng: &mut G) -> usize {
    let k = k.max(1);
    let n = keys.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if keys[idx] < keys[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over inverted keys.
///
/// weight_i = worst_key - key_i + epsilon, infinite keys get epsilon.
fn roulette<G: Rng>(keys: &[f64], rng: &mut G) -> usize {
    let n = keys.len();
    if n == 1 {
        return 0;
    }

    let epsilon = 1e-10;
    let worst = keys
        .iter()
        .copied()
        .filter(|k| k.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    let weights: Vec<f64> = keys
        .iter()
        .map(|&k| {
            if k.is_finite() {
                (worst - k + epsilon).max(epsilon)
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

fn rank<G: Rng>(keys: &[f64], rng: &mut G) -> usize {
    let n = keys.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        keys[a]
            .partial_cmp(&keys[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}
