//! Tree-shaped representation for program/expression individuals.
//!
//! Only the container lives here. Executing a tree or measuring its depth
//! is the problem's business.

use crate::population::Representation;
use std::fmt;

/// An n-ary tree whose nodes carry a value of type `T`.
///
/// # Examples
///
/// ```
/// use u_isa::Tree;
///
/// // (+ x (* y 2))
/// let expr = Tree::node("+", vec![
///     Tree::leaf("x"),
///     Tree::node("*", vec![Tree::leaf("y"), Tree::leaf("2")]),
/// ]);
/// assert_eq!(expr.size(), 5);
/// assert_eq!(expr.preorder().copied().collect::<Vec<_>>(), ["+", "x", "*", "y", "2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree<T> {
    /// Value stored at this node.
    pub value: T,
    /// Child subtrees, left to right.
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Creates a leaf.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Creates an inner node.
    pub fn node(value: T, children: Vec<Tree<T>>) -> Self {
        Self { value, children }
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Tree::size).sum::<usize>()
    }

    /// Iterates over node values in prefix order.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder { stack: vec![self] }
    }
}

impl<T: Clone + fmt::Debug> Representation for Tree<T> {}

/// Prefix-order iterator over the values of a [`Tree`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(&node.value)
    }
}
