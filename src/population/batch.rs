//! Representation shapes and dense batching.

use crate::error::{Result, SearchError};
use std::fmt;

/// Raw encoding of a candidate solution.
///
/// Dense numeric vectors expose their values through
/// [`dense`](Representation::dense) so that a population of them can be
/// stacked into one contiguous [`Batch`] for vectorized evaluation. Anything
/// else (trees, permutations, heterogeneous encodings) keeps the default
/// and stays a plain ordered sequence.
pub trait Representation: Clone + fmt::Debug {
    /// Dense numeric view of this representation, if it has one.
    fn dense(&self) -> Option<&[f64]> {
        None
    }

    /// Shape used when validating a stacked population.
    fn shape(&self) -> Shape {
        match self.dense() {
            Some(values) => Shape::Dense(values.len()),
            None => Shape::Structured,
        }
    }
}

impl Representation for Vec<f64> {
    fn dense(&self) -> Option<&[f64]> {
        Some(self.as_slice())
    }
}

impl Representation for Vec<usize> {}
impl Representation for Vec<i64> {}
impl Representation for Vec<bool> {}

/// Layout class of a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Dense numeric vector of the given width.
    Dense(usize),
    /// Tree or other non-stackable encoding.
    Structured,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Dense(width) => write!(f, "dense[{width}]"),
            Shape::Structured => write!(f, "structured"),
        }
    }
}

/// Row-major matrix holding a stacked population of dense representations.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Batch {
    /// Number of stacked representations.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of each representation.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Values of row `i`.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates over rows in population order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// All values, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Checks that every representation has the same shape and, when that
/// shape is dense, stacks them into a [`Batch`].
///
/// Returns `Ok(None)` for structured populations.
pub(crate) fn stack<R: Representation>(reprs: &[R]) -> Result<Option<Batch>> {
    let first = match reprs.first() {
        Some(r) => r.shape(),
        None => return Err(SearchError::EmptyPopulation),
    };

    for (index, repr) in reprs.iter().enumerate().skip(1) {
        let found = repr.shape();
        if found != first {
            return Err(SearchError::ShapeMismatch {
                index,
                expected: first,
                found,
            });
        }
    }

    let cols = match first {
        Shape::Dense(cols) => cols,
        Shape::Structured => return Ok(None),
    };

    let mut data = Vec::with_capacity(reprs.len() * cols);
    for repr in reprs {
        if let Some(values) = repr.dense() {
            data.extend_from_slice(values);
        }
    }

    Ok(Some(Batch {
        rows: reprs.len(),
        cols,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    #[derive(Clone, Debug)]
    enum Mixed {
        Dense(Vec<f64>),
        Other,
    }

    impl Representation for Mixed {
        fn dense(&self) -> Option<&[f64]> {
            match self {
                Mixed::Dense(v) => Some(v.as_slice()),
                Mixed::Other => None,
            }
        }
    }

    #[test]
    fn test_stack_dense() {
        let reprs = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let batch = stack(&reprs).unwrap().unwrap();
        assert_eq!(batch.rows(), 3);
        assert_eq!(batch.cols(), 2);
        assert_eq!(batch.row(1), &[3.0, 4.0]);
        assert_eq!(batch.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(batch.iter_rows().count(), 3);
    }

    #[test]
    fn test_stack_structured_is_none() {
        let reprs = vec![Tree::leaf(1), Tree::node(2, vec![Tree::leaf(3)])];
        assert!(stack(&reprs).unwrap().is_none());
    }

    #[test]
    fn test_stack_rejects_mixed() {
        let reprs = vec![Mixed::Dense(vec![1.0]), Mixed::Other];
        match stack(&reprs) {
            Err(SearchError::ShapeMismatch {
                index,
                expected,
                found,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(expected, Shape::Dense(1));
                assert_eq!(found, Shape::Structured);
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_stack_rejects_ragged() {
        let reprs = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            stack(&reprs),
            Err(SearchError::ShapeMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_stack_empty() {
        let reprs: Vec<Vec<f64>> = vec![];
        assert!(matches!(stack(&reprs), Err(SearchError::EmptyPopulation)));
    }
}
