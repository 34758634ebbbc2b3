//! Error types shared by every search strategy.
//!
//! Nothing in the search core is recovered automatically: configuration
//! problems are reported before a run starts, and evaluation failures raised
//! by a [`Problem`](crate::problem::Problem) are handed back to the caller
//! untouched.

use crate::population::Shape;
use thiserror::Error;

/// Error type returned by problem evaluators.
pub type EvalError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the crate.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;

/// Errors raised by the search core.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Random search could not draw a feasible starting point.
    #[error("unable to initialize: no feasible solution after {attempts} random draws")]
    InitializationFailed {
        /// Number of draws performed before giving up.
        attempts: usize,
    },

    /// `step` was called before `initialize`.
    #[error("search has not been initialized")]
    NotInitialized,

    /// A representation does not fit the layout of the rest of the population.
    #[error("representation {index} does not match the population layout: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Position of the offending representation.
        index: usize,
        /// Shape established by the first representation.
        expected: Shape,
        /// Shape of the offending representation.
        found: Shape,
    },

    /// A population was built from zero representations.
    #[error("cannot build a population without individuals")]
    EmptyPopulation,

    /// An operator returned something its role does not allow.
    #[error("{operator} violated its contract: {reason}")]
    OperatorContract {
        /// Operator role (`initializer`, `selector`, `crossover`).
        operator: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// The problem instance failed to evaluate a solution or population.
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
}

impl SearchError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SearchError::InvalidConfig(msg.into())
    }

    pub(crate) fn contract(operator: &'static str, reason: impl Into<String>) -> Self {
        SearchError::OperatorContract {
            operator,
            reason: reason.into(),
        }
    }
}
