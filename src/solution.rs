//! Single evaluated candidate.

/// A candidate solution: its representation plus the fitness and validity
/// assigned by the problem instance.
///
/// A freshly created solution has `NaN` fitness and is marked invalid until
/// [`Problem::evaluate_sol`](crate::problem::Problem::evaluate_sol) fills
/// both fields in.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<R> {
    /// Raw encoding of the candidate.
    pub repr: R,
    /// Fitness assigned by the problem instance.
    pub fitness: f64,
    /// Whether the candidate satisfies the solution space's constraints.
    pub valid: bool,
}

impl<R> Solution<R> {
    /// Wraps a representation in an unevaluated solution.
    pub fn new(repr: R) -> Self {
        Self {
            repr,
            fitness: f64::NAN,
            valid: false,
        }
    }

    /// Wraps a representation together with known evaluation results.
    pub fn evaluated(repr: R, fitness: f64, valid: bool) -> Self {
        Self {
            repr,
            fitness,
            valid,
        }
    }

    /// Returns `true` once a fitness value has been assigned.
    pub fn is_evaluated(&self) -> bool {
        !self.fitness.is_nan()
    }
}
