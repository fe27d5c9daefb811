use core::fmt;

use log::debug;

use crate::bounds::IterBounds;
use crate::error::{TreeError, TreeResult};
use crate::iter::BoundedIter;
use crate::node::{NodeColor, NodeIndex};
use crate::tree::OrderedTree;

/// Red-black balanced ordered multiset.
///
/// Every insertion goes through the plain [`OrderedTree`] insert and is then
/// repaired so that the root is black, no red node has a red parent, and all
/// root-to-leaf paths carry the same number of black nodes.
pub struct RedBlackTree<T> {
    tree: OrderedTree<T>,
}

impl<T> RedBlackTree<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: OrderedTree::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: OrderedTree::with_capacity(capacity),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }

    /// Read-only view of the underlying tree, for structural inspection.
    pub fn as_tree(&self) -> &OrderedTree<T> {
        &self.tree
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[must_use]
    pub fn root(&self) -> Option<NodeIndex> {
        self.tree.root()
    }

    pub fn iterator_bounds(&self) -> &IterBounds<T> {
        self.tree.iterator_bounds()
    }

    pub fn set_iterator_min(&mut self, min: Option<T>) {
        self.tree.set_iterator_min(min);
    }

    pub fn set_iterator_max(&mut self, max: Option<T>) {
        self.tree.set_iterator_max(max);
    }

    pub fn set_iterator_bounds(&mut self, bounds: IterBounds<T>) {
        self.tree.set_iterator_bounds(bounds);
    }

    fn fix_red_violation(&mut self, start_node_idx: NodeIndex) {
        let mut child = start_node_idx;

        loop {
            let parent = self.tree.get_node_by_idx(child).parent;

            if parent.is_nil() {
                debug!("repair {child}: root, recolor black");
                self.tree.get_node_by_idx_mut(child).color = NodeColor::Black;
                return;
            }

            if !self.tree.is_red(parent) {
                return;
            }

            let grandparent = self.tree.get_node_by_idx(parent).parent;

            // A red parent is never the root of a valid tree; keep the root
            // black if it ever is.
            if grandparent.is_nil() {
                self.tree.get_node_by_idx_mut(parent).color = NodeColor::Black;
                return;
            }

            let grandparent_node = self.tree.get_node_by_idx(grandparent);
            let parent_is_left = grandparent_node.left == parent;
            let uncle = if parent_is_left {
                grandparent_node.right
            } else {
                grandparent_node.left
            };

            if self.tree.is_red(uncle) {
                debug!("repair {child}: red uncle {uncle}, recolor and continue at {grandparent}");
                self.tree.get_node_by_idx_mut(parent).flip_color();
                self.tree.get_node_by_idx_mut(uncle).flip_color();
                self.tree.get_node_by_idx_mut(grandparent).flip_color();

                child = grandparent;
                continue;
            }

            let mut parent = parent;
            let child_is_left = self.tree.get_node_by_idx(parent).left == child;

            if child_is_left != parent_is_left {
                debug!("repair {child}: zig-zag under {parent}, straighten");
                self.tree.rotate_pair(child, parent);
                parent = child;
            }

            debug!("repair {child}: zig-zig, rotate {parent} over {grandparent}");
            self.tree.rotate_pair(parent, grandparent);
            self.tree.get_node_by_idx_mut(parent).flip_color();
            self.tree.get_node_by_idx_mut(grandparent).flip_color();

            return;
        }
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Inserts `value` and restores the red-black invariants. Returns the
    /// handle of the new node; later insertions may move it.
    pub fn insert(&mut self, value: T) -> NodeIndex {
        let new_node = self.tree.insert(value);
        self.fix_red_violation(new_node);
        new_node
    }

    /// Inserts a possibly-absent value, rejecting `None`.
    pub fn try_insert(&mut self, value: Option<T>) -> TreeResult<NodeIndex> {
        value
            .map(|value| self.insert(value))
            .ok_or(TreeError::InvalidArgument)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    pub fn iter(&self) -> BoundedIter<'_, T> {
        self.tree.iter()
    }

    pub fn range<'a>(&'a self, min: Option<&'a T>, max: Option<&'a T>) -> BoundedIter<'a, T> {
        self.tree.range(min, max)
    }

    pub fn to_sorted_vec(&self) -> Vec<&T> {
        self.tree.to_sorted_vec()
    }

    /// Checks the BST order, the parent links and the three red-black
    /// invariants.
    pub fn validate(&self) -> TreeResult<()> {
        self.tree.validate()?;
        self.tree.check_red_black().map(|_| ())
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("len", &self.len())
            .field("level_order", &self.tree.to_level_order_vec())
            .field("bounds", self.iterator_bounds())
            .finish()
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Ord> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = BoundedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
