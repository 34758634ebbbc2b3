//! Population containers.
//!
//! A [`Population`] stores candidate representations together with parallel
//! fitness and validity arrays. The whole population is evaluated in one
//! batched call to [`Problem::evaluate_pop`](crate::problem::Problem::evaluate_pop).
//!
//! Two flavours exist, distinguished by [`PopulationKind`]:
//!
//! - [`Population::new`]: generic container. Dense numeric representations
//!   are stacked into a [`Batch`] for vectorized evaluation.
//! - [`Population::tree`] (a *PopulationTree*): used for tree-shaped
//!   individuals. Representations always stay a plain ordered sequence.

mod batch;

pub use batch::{Batch, Representation, Shape};

use crate::error::{Result, SearchError};
use crate::problem::compare_fitness;
use crate::solution::Solution;
use std::cmp::Ordering;

/// Alias for a population built with [`Population::tree`].
pub type PopulationTree<R> = Population<R>;

/// Which container flavour a population was built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationKind {
    /// Generic container, dense representations are stacked.
    Generic,
    /// Tree container, representations are never stacked.
    Tree,
}

/// An ordered collection of candidate representations with their
/// evaluation results.
#[derive(Debug, Clone)]
pub struct Population<R> {
    individuals: Vec<R>,
    fitness: Vec<f64>,
    valid: Vec<bool>,
    batch: Option<Batch>,
    kind: PopulationKind,
}

impl<R: Representation> Population<R> {
    /// Builds a generic population.
    ///
    /// If the representations are dense numeric vectors they are stacked
    /// into a [`Batch`]. Mixing dense and structured representations, or
    /// dense vectors of different widths, is rejected.
    pub fn new(individuals: Vec<R>) -> Result<Self> {
        let batch = batch::stack(&individuals)?;
        Ok(Self::assemble(individuals, batch, PopulationKind::Generic))
    }

    /// Builds a tree population (PopulationTree).
    pub fn tree(individuals: Vec<R>) -> Result<Self> {
        if individuals.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        Ok(Self::assemble(individuals, None, PopulationKind::Tree))
    }

    /// Builds a population of the requested kind.
    pub fn with_kind(individuals: Vec<R>, kind: PopulationKind) -> Result<Self> {
        match kind {
            PopulationKind::Generic => Self::new(individuals),
            PopulationKind::Tree => Self::tree(individuals),
        }
    }

    fn assemble(individuals: Vec<R>, batch: Option<Batch>, kind: PopulationKind) -> Self {
        let n = individuals.len();
        Self {
            individuals,
            fitness: vec![f64::NAN; n],
            valid: vec![false; n],
            batch,
            kind,
        }
    }

    /// Extracts the best individual as a [`Solution`].
    ///
    /// Feasible individuals are preferred. If none is feasible the best
    /// infeasible one is returned.
    pub fn get_best(&self, minimize: bool) -> Option<Solution<R>> {
        self.best_index(minimize).map(|i| self.solution(i))
    }

    /// Returns individual `i` with its evaluation results.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn solution(&self, i: usize) -> Solution<R> {
        Solution::evaluated(self.individuals[i].clone(), self.fitness[i], self.valid[i])
    }
}

impl<R> Population<R> {
    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Container flavour.
    pub fn kind(&self) -> PopulationKind {
        self.kind
    }

    /// Representations in population order.
    pub fn individuals(&self) -> &[R] {
        &self.individuals
    }

    /// Fitness values, parallel to [`individuals`](Self::individuals).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Validity flags, parallel to [`individuals`](Self::individuals).
    pub fn valid(&self) -> &[bool] {
        &self.valid
    }

    /// Mutable fitness array, for batched evaluators.
    pub fn fitness_mut(&mut self) -> &mut [f64] {
        &mut self.fitness
    }

    /// Mutable validity array, for batched evaluators.
    pub fn valid_mut(&mut self) -> &mut [bool] {
        &mut self.valid
    }

    /// Records the evaluation result of individual `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn set_evaluation(&mut self, i: usize, fitness: f64, valid: bool) {
        self.fitness[i] = fitness;
        self.valid[i] = valid;
    }

    /// Stacked dense view, present only for generic populations of dense
    /// representations.
    pub fn batch(&self) -> Option<&Batch> {
        self.batch.as_ref()
    }

    /// Number of feasible individuals.
    pub fn feasible_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// Index of the best individual, feasible ones first.
    pub fn best_index(&self, minimize: bool) -> Option<usize> {
        (0..self.len()).min_by(|&a, &b| match (self.valid[a], self.valid[b]) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_fitness(self.fitness[a], self.fitness[b], minimize),
        })
    }

    /// Consumes the population, returning its representations.
    pub fn into_individuals(self) -> Vec<R> {
        self.individuals
    }
}
