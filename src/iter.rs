use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::error::{TreeError, TreeResult};
use crate::node::NodeIndex;
use crate::tree::OrderedTree;

/// Ascending, forward-only iterator over the values of a tree that lie in
/// `[min, max]`.
///
/// The stack always holds the remaining candidates, smallest on top. Values
/// below `min` are never pushed; values above `max` are discarded lazily when
/// they reach the top. The iterator borrows the tree, so the tree cannot be
/// mutated or reconfigured while it is alive.
pub struct BoundedIter<'a, T> {
    tree: &'a OrderedTree<T>,
    min: Option<&'a T>,
    max: Option<&'a T>,
    stack: Vec<NodeIndex>,
}

impl<'a, T: Ord> BoundedIter<'a, T> {
    pub(crate) fn new(tree: &'a OrderedTree<T>, min: Option<&'a T>, max: Option<&'a T>) -> Self {
        let mut iter = Self {
            tree,
            min,
            max,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    /// Pushes `node` and its left descendants, skipping over any node below
    /// `min` (and with it that node's left subtree).
    fn push_left_spine(&mut self, mut node: NodeIndex) {
        let tree = self.tree;

        while !node.is_nil() {
            let curr = tree.get_node_by_idx(node);

            if self.min.is_some_and(|min| curr.value < *min) {
                node = curr.right;
            } else {
                self.stack.push(node);
                node = curr.left;
            }
        }
    }

    /// Whether a value at or below `max` remains. Drops candidates above
    /// `max` from the top of the stack as a side effect.
    pub fn has_next(&mut self) -> bool {
        let tree = self.tree;

        while let Some(&top) = self.stack.last() {
            let top_node = tree.get_node_by_idx(top);

            if self.max.is_some_and(|max| top_node.value > *max) {
                self.stack.pop();
                self.push_left_spine(top_node.right);
            } else {
                return true;
            }
        }

        false
    }

    /// Next value in ascending order.
    ///
    /// # Errors
    ///
    /// [`TreeError::ExhaustedIterator`] once every value in range has been
    /// returned.
    pub fn try_next(&mut self) -> TreeResult<&'a T> {
        if !self.has_next() {
            return Err(TreeError::ExhaustedIterator);
        }

        let tree = self.tree;
        let node = self.stack.pop().ok_or(TreeError::ExhaustedIterator)?;
        let curr = tree.get_node_by_idx(node);
        self.push_left_spine(curr.right);

        Ok(&curr.value)
    }
}

impl<'a, T: Ord> Iterator for BoundedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<T: Ord> FusedIterator for BoundedIter<'_, T> {}
