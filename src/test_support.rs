//! Problems and operators shared by unit tests.

use crate::device::Device;
use crate::error::EvalError;
use crate::operators::{Crossover, Initializer, Mutator};
use crate::population::Population;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::tree::Tree;
use rand::Rng;
use std::cell::Cell;

// ---- Problems ----

/// Fitness is the first element; feasible when it reaches `feasible_from`.
pub struct FirstElement {
    pub minimize: bool,
    pub feasible_from: f64,
    pub pop_evaluations: Cell<usize>,
}

impl FirstElement {
    pub fn minimize() -> Self {
        Self {
            minimize: true,
            feasible_from: f64::NEG_INFINITY,
            pop_evaluations: Cell::new(0),
        }
    }

    pub fn maximize() -> Self {
        Self {
            minimize: false,
            ..Self::minimize()
        }
    }

    pub fn feasible_from(threshold: f64) -> Self {
        Self {
            feasible_from: threshold,
            ..Self::minimize()
        }
    }
}

impl Problem for FirstElement {
    type Repr = Vec<f64>;
    type Space = ();

    fn space(&self) -> &() {
        &()
    }

    fn minimize(&self) -> bool {
        self.minimize
    }

    fn evaluate_sol(&self, sol: &mut Solution<Vec<f64>>) -> Result<(), EvalError> {
        sol.fitness = sol.repr[0];
        sol.valid = sol.repr[0] >= self.feasible_from;
        Ok(())
    }

    fn evaluate_pop(&self, pop: &mut Population<Vec<f64>>) -> Result<(), EvalError> {
        self.pop_evaluations.set(self.pop_evaluations.get() + 1);
        for i in 0..pop.len() {
            let x = pop.individuals()[i][0];
            pop.set_evaluation(i, x, x >= self.feasible_from);
        }
        Ok(())
    }
}

/// Bounds of a box-constrained continuous space.
pub struct BoxSpace {
    pub dim: usize,
    pub lo: f64,
    pub hi: f64,
}

/// `f(x) = sum(x_i^2)` evaluated over the stacked batch.
pub struct Sphere {
    pub space: BoxSpace,
}

impl Sphere {
    pub fn new(dim: usize) -> Self {
        Self {
            space: BoxSpace {
                dim,
                lo: -5.0,
                hi: 5.0,
            },
        }
    }
}

impl Problem for Sphere {
    type Repr = Vec<f64>;
    type Space = BoxSpace;

    fn space(&self) -> &BoxSpace {
        &self.space
    }

    fn minimize(&self) -> bool {
        true
    }

    fn evaluate_sol(&self, sol: &mut Solution<Vec<f64>>) -> Result<(), EvalError> {
        sol.fitness = sol.repr.iter().map(|x| x * x).sum();
        sol.valid = true;
        Ok(())
    }

    fn evaluate_pop(&self, pop: &mut Population<Vec<f64>>) -> Result<(), EvalError> {
        let scores: Vec<f64> = match pop.batch() {
            Some(batch) => batch
                .iter_rows()
                .map(|row| row.iter().map(|x| x * x).sum())
                .collect(),
            None => pop
                .individuals()
                .iter()
                .map(|x| x.iter().map(|v| v * v).sum())
                .collect(),
        };
        pop.fitness_mut().copy_from_slice(&scores);
        pop.valid_mut().fill(true);
        Ok(())
    }
}

/// Always fails to evaluate.
pub struct Broken;

impl Problem for Broken {
    type Repr = Vec<f64>;
    type Space = ();

    fn space(&self) -> &() {
        &()
    }

    fn minimize(&self) -> bool {
        true
    }

    fn evaluate_sol(&self, _sol: &mut Solution<Vec<f64>>) -> Result<(), EvalError> {
        Err("evaluator offline".into())
    }
}

/// Minimizes the number of nodes in a tree.
pub struct TreeSize;

impl Problem for TreeSize {
    type Repr = Tree<u8>;
    type Space = usize;

    fn space(&self) -> &usize {
        &3
    }

    fn minimize(&self) -> bool {
        true
    }

    fn evaluate_sol(&self, sol: &mut Solution<Tree<u8>>) -> Result<(), EvalError> {
        sol.fitness = sol.repr.size() as f64;
        sol.valid = true;
        Ok(())
    }
}

// ---- Initializers ----

/// Yields `[1]`, `[2]`, ..., `[period]`, `[1]`, ... regardless of the generator.
pub struct Cycle {
    pub period: usize,
    pub next: Cell<usize>,
}

impl Cycle {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            next: Cell::new(0),
        }
    }
}

impl<S> Initializer<S, Vec<f64>> for Cycle {
    fn initialize<G: Rng>(&self, _: &S, _: &Device, count: usize, _: &mut G) -> Vec<Vec<f64>> {
        (0..count)
            .map(|_| {
                let k = self.next.get();
                self.next.set(k + 1);
                vec![(k % self.period + 1) as f64]
            })
            .collect()
    }
}

/// Uniform vectors inside a [`BoxSpace`].
pub struct Uniform;

impl Initializer<BoxSpace, Vec<f64>> for Uniform {
    fn initialize<G: Rng>(
        &self,
        space: &BoxSpace,
        _: &Device,
        count: usize,
        rng: &mut G,
    ) -> Vec<Vec<f64>> {
        (0..count)
            .map(|_| {
                (0..space.dim)
                    .map(|_| rng.random_range(space.lo..space.hi))
                    .collect()
            })
            .collect()
    }
}

/// Uniform scalars in `[0, 100)`, one element each.
pub struct Scalar;

impl<S> Initializer<S, Vec<f64>> for Scalar {
    fn initialize<G: Rng>(&self, _: &S, _: &Device, count: usize, rng: &mut G) -> Vec<Vec<f64>> {
        (0..count)
            .map(|_| vec![rng.random_range(0.0..100.0)])
            .collect()
    }
}

/// Always returns one representation too few.
pub struct ShortChanged;

impl<S> Initializer<S, Vec<f64>> for ShortChanged {
    fn initialize<G: Rng>(&self, _: &S, _: &Device, count: usize, _: &mut G) -> Vec<Vec<f64>> {
        vec![vec![1.0]; count.saturating_sub(1)]
    }
}

/// Random trees up to the depth given by the space.
pub struct RandomTree;

impl Initializer<usize, Tree<u8>> for RandomTree {
    fn initialize<G: Rng>(
        &self,
        max_depth: &usize,
        _: &Device,
        count: usize,
        rng: &mut G,
    ) -> Vec<Tree<u8>> {
        (0..count).map(|_| grow(*max_depth, rng)).collect()
    }
}

fn grow<G: Rng>(depth: usize, rng: &mut G) -> Tree<u8> {
    if depth == 0 || rng.random_bool(0.3) {
        Tree::leaf(rng.random_range(0..10))
    } else {
        let arity = rng.random_range(1..=2);
        Tree::node(
            rng.random_range(10..20),
            (0..arity).map(|_| grow(depth - 1, rng)).collect(),
        )
    }
}

// ---- Variation operators ----

/// Adds a constant to every element.
pub struct Shift(pub f64);

impl Mutator<Vec<f64>> for Shift {
    fn mutate<G: Rng>(&self, repr: &Vec<f64>, _: &mut G) -> Vec<f64> {
        repr.iter().map(|x| x + self.0).collect()
    }
}

/// Perturbs one random element by up to `scale`.
pub struct Jitter(pub f64);

impl Mutator<Vec<f64>> for Jitter {
    fn mutate<G: Rng>(&self, repr: &Vec<f64>, rng: &mut G) -> Vec<f64> {
        let mut out = repr.clone();
        let i = rng.random_range(0..out.len());
        out[i] += rng.random_range(-self.0..self.0);
        out
    }
}

/// Arithmetic blend producing two children.
pub struct Blend;

impl Crossover<Vec<f64>> for Blend {
    fn crossover<G: Rng>(&self, a: &Vec<f64>, b: &Vec<f64>, rng: &mut G) -> Vec<Vec<f64>> {
        let w: f64 = rng.random();
        let c1 = a.iter().zip(b).map(|(x, y)| w * x + (1.0 - w) * y).collect();
        let c2 = a.iter().zip(b).map(|(x, y)| (1.0 - w) * x + w * y).collect();
        vec![c1, c2]
    }
}

/// Child is the elementwise maximum plus one: never better when minimizing
/// non-negative values.
pub struct WorseChild;

impl Crossover<Vec<f64>> for WorseChild {
    fn crossover<G: Rng>(&self, a: &Vec<f64>, b: &Vec<f64>, _: &mut G) -> Vec<Vec<f64>> {
        vec![a.iter().zip(b).map(|(x, y)| x.max(*y) + 1.0).collect()]
    }
}

/// Returns no offspring at all.
pub struct Barren;

impl Crossover<Vec<f64>> for Barren {
    fn crossover<G: Rng>(&self, _: &Vec<f64>, _: &Vec<f64>, _: &mut G) -> Vec<Vec<f64>> {
        Vec::new()
    }
}

/// Replaces the tree with a random leaf.
pub struct Prune;

impl Mutator<Tree<u8>> for Prune {
    fn mutate<G: Rng>(&self, repr: &Tree<u8>, rng: &mut G) -> Tree<u8> {
        if repr.is_leaf() {
            Tree::leaf(rng.random_range(0..10))
        } else {
            repr.children[rng.random_range(0..repr.children.len())].clone()
        }
    }
}

/// Swaps the first child of each parent.
pub struct SubtreeSwap;

impl Crossover<Tree<u8>> for SubtreeSwap {
    fn crossover<G: Rng>(&self, a: &Tree<u8>, b: &Tree<u8>, _: &mut G) -> Vec<Tree<u8>> {
        let mut c1 = a.clone();
        let mut c2 = b.clone();
        if let (Some(x), Some(y)) = (c1.children.first_mut(), c2.children.first_mut()) {
            std::mem::swap(x, y);
        }
        vec![c1, c2]
    }
}
