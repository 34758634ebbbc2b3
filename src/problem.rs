//! Problem instance contract.
//!
//! The search core knows nothing about the problem it solves. A [`Problem`]
//! exposes the solution-space descriptor handed to initializers, the
//! optimization direction, and two evaluation entry points: one for a single
//! [`Solution`] and one batched call for a whole [`Population`].

use crate::error::EvalError;
use crate::population::{Population, Representation};
use crate::solution::Solution;
use std::cmp::Ordering;

/// An optimization problem instance.
///
/// Implementations must be deterministic: evaluating the same
/// representation twice yields the same fitness and validity. The
/// `minimize` flag is fixed for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// use u_isa::{EvalError, Problem, Solution};
///
/// struct Sphere;
///
/// impl Problem for Sphere {
///     type Repr = Vec<f64>;
///     type Space = usize;
///
///     fn space(&self) -> &usize { &3 }
///     fn minimize(&self) -> bool { true }
///
///     fn evaluate_sol(&self, sol: &mut Solution<Vec<f64>>) -> Result<(), EvalError> {
///         sol.fitness = sol.repr.iter().map(|x| x * x).sum();
///         sol.valid = true;
///         Ok(())
///     }
/// }
/// ```
pub trait Problem {
    /// Representation type of candidate solutions.
    type Repr: Representation;

    /// Solution-space descriptor passed to initializers.
    type Space;

    /// Returns the solution-space descriptor.
    fn space(&self) -> &Self::Space;

    /// `true` if lower fitness is better.
    fn minimize(&self) -> bool;

    /// Evaluates one solution, writing fitness and validity in place.
    fn evaluate_sol(&self, sol: &mut Solution<Self::Repr>) -> Result<(), EvalError>;

    /// Evaluates a whole population in one call, writing the fitness and
    /// validity arrays in place. Order must be preserved.
    ///
    /// The default implementation evaluates each individual through
    /// [`evaluate_sol`](Self::evaluate_sol). Problems with a vectorized
    /// evaluator should override it and read [`Population::batch`].
    fn evaluate_pop(&self, pop: &mut Population<Self::Repr>) -> Result<(), EvalError> {
        for i in 0..pop.len() {
            let mut sol = Solution::new(pop.individuals()[i].clone());
            self.evaluate_sol(&mut sol)?;
            pop.set_evaluation(i, sol.fitness, sol.valid);
        }
        Ok(())
    }
}

impl<P: Problem + ?Sized> Problem for &P {
    type Repr = P::Repr;
    type Space = P::Space;

    fn space(&self) -> &Self::Space {
        (**self).space()
    }

    fn minimize(&self) -> bool {
        (**self).minimize()
    }

    fn evaluate_sol(&self, sol: &mut Solution<Self::Repr>) -> Result<(), EvalError> {
        (**self).evaluate_sol(sol)
    }

    fn evaluate_pop(&self, pop: &mut Population<Self::Repr>) -> Result<(), EvalError> {
        (**self).evaluate_pop(pop)
    }
}

/// Orders two fitness values so that the better one compares as `Less`.
///
/// `NaN` is always worse than any number.
pub fn compare_fitness(a: f64, b: f64, minimize: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if minimize {
                ord
            } else {
                ord.reverse()
            }
        }
    }
}

/// Returns `true` if `candidate` is strictly better than `incumbent`.
pub fn is_better(candidate: f64, incumbent: f64, minimize: bool) -> bool {
    compare_fitness(candidate, incumbent, minimize) == Ordering::Less
}

/// Returns `true` if solution `a` should replace solution `b`.
///
/// Feasibility dominates: a valid solution always beats an invalid one.
pub(crate) fn solution_is_better<R>(a: &Solution<R>, b: &Solution<R>, minimize: bool) -> bool {
    match (a.valid, b.valid) {
        (true, false) => true,
        (false, true) => false,
        _ => is_better(a.fitness, b.fitness, minimize),
    }
}
