//! Operator roles consumed by the search core.
//!
//! Each role is a trait with a single method. Problem-specific operators
//! implement these traits; the core only orchestrates when they are called.
//!
//! | Role | Input | Output |
//! |---|---|---|
//! | [`Initializer`] | solution space, device, count | `count` representations |
//! | [`Selector`] | evaluated population | index of one parent |
//! | [`Mutator`] | one representation | a new representation |
//! | [`Crossover`] | two representations | one or two offspring |
//!
//! Built-in selectors live in [`Selection`].

mod selection;

pub use selection::Selection;

use crate::device::Device;
use crate::population::Population;
use rand::Rng;

/// Produces raw representations from the solution space.
///
/// Must be deterministic given the generator state and return exactly
/// `count` representations.
pub trait Initializer<S, R> {
    /// Draws `count` representations.
    fn initialize<G: Rng>(&self, space: &S, device: &Device, count: usize, rng: &mut G) -> Vec<R>;
}

/// Picks parents from an evaluated population.
pub trait Selector<R> {
    /// Returns the index of the selected individual.
    ///
    /// `minimize` carries the problem's optimization direction.
    fn select<G: Rng>(&self, population: &Population<R>, minimize: bool, rng: &mut G) -> usize;
}

/// Moves a representation across the solution space.
pub trait Mutator<R> {
    /// Returns a mutated copy of `repr`.
    fn mutate<G: Rng>(&self, repr: &R, rng: &mut G) -> R;
}

/// Recombines two parents.
pub trait Crossover<R> {
    /// Returns one or two offspring.
    fn crossover<G: Rng>(&self, parent1: &R, parent2: &R, rng: &mut G) -> Vec<R>;
}

impl<S, R, T: Initializer<S, R> + ?Sized> Initializer<S, R> for &T {
    fn initialize<G: Rng>(&self, space: &S, device: &Device, count: usize, rng: &mut G) -> Vec<R> {
        (**self).initialize(space, device, count, rng)
    }
}

impl<R, T: Selector<R> + ?Sized> Selector<R> for &T {
    fn select<G: Rng>(&self, population: &Population<R>, minimize: bool, rng: &mut G) -> usize {
        (**self).select(population, minimize, rng)
    }
}

impl<R, T: Mutator<R> + ?Sized> Mutator<R> for &T {
    fn mutate<G: Rng>(&self, repr: &R, rng: &mut G) -> R {
        (**self).mutate(repr, rng)
    }
}

impl<R, T: Crossover<R> + ?Sized> Crossover<R> for &T {
    fn crossover<G: Rng>(&self, parent1: &R, parent2: &R, rng: &mut G) -> Vec<R> {
        (**self).crossover(parent1, parent2, rng)
    }
}
