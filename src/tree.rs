use core::cmp::Ordering;
use core::fmt;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::bounds::IterBounds;
use crate::error::{TreeError, TreeResult};
use crate::iter::BoundedIter;
use crate::node::{Node, NodeColor, NodeIndex};

/// Unbalanced binary search tree stored in an arena.
///
/// Equal values are kept (multiset semantics) and routed to the left of
/// existing equal values. Nodes are only ever created by insertion and only
/// ever released all at once by [`OrderedTree::clear`], so the arena never has
/// holes and its length is the node count.
pub struct OrderedTree<T> {
    pub(crate) storage: Vec<Node<T>>,
    pub(crate) root: NodeIndex,
    pub(crate) bounds: IterBounds<T>,
}

impl<T> OrderedTree<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            root: NodeIndex::NIL,
            bounds: IterBounds::unbounded(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            root: NodeIndex::NIL,
            bounds: IterBounds::unbounded(),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    /// Number of values stored, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Drops every node. Handles obtained before the call become invalid.
    ///
    /// Iteration bounds are configuration and survive the call.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.storage.len());
        self.storage.clear();
        self.root = NodeIndex::NIL;
    }

    #[must_use]
    pub fn root(&self) -> Option<NodeIndex> {
        self.root.to_option()
    }

    #[must_use]
    pub fn left(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.get_node(node)?.left.to_option()
    }

    #[must_use]
    pub fn right(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.get_node(node)?.right.to_option()
    }

    #[must_use]
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.get_node(node)?.parent.to_option()
    }

    #[must_use]
    pub fn value(&self, node: NodeIndex) -> Option<&T> {
        self.get_node(node).map(|n| &n.value)
    }

    /// Color tag of `node`. Only meaningful when the tree is maintained by a
    /// [`RedBlackTree`](crate::RedBlackTree); plain inserts leave nodes red.
    #[must_use]
    pub fn color(&self, node: NodeIndex) -> Option<NodeColor> {
        self.get_node(node).map(|n| n.color)
    }

    /// Values in breadth-first order, root first.
    #[must_use]
    pub fn to_level_order_vec(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let mut queue = VecDeque::new();

        if !self.root.is_nil() {
            queue.push_back(self.root);
        }

        while let Some(idx) = queue.pop_front() {
            let node = self.get_node_by_idx(idx);
            values.push(&node.value);

            if !node.left.is_nil() {
                queue.push_back(node.left);
            }
            if !node.right.is_nil() {
                queue.push_back(node.right);
            }
        }

        values
    }

    pub fn iterator_bounds(&self) -> &IterBounds<T> {
        &self.bounds
    }

    /// Inclusive lower bound for iterators created after this call.
    pub fn set_iterator_min(&mut self, min: Option<T>) {
        self.bounds.min = min;
    }

    /// Inclusive upper bound for iterators created after this call.
    pub fn set_iterator_max(&mut self, max: Option<T>) {
        self.bounds.max = max;
    }

    pub fn set_iterator_bounds(&mut self, bounds: IterBounds<T>) {
        self.bounds = bounds;
    }

    fn get_node(&self, node: NodeIndex) -> Option<&Node<T>> {
        self.storage.get(node.0)
    }

    #[inline]
    pub(crate) fn get_node_by_idx(&self, node: NodeIndex) -> &Node<T> {
        &self.storage[node.0]
    }

    #[inline]
    pub(crate) fn get_node_by_idx_mut(&mut self, node: NodeIndex) -> &mut Node<T> {
        &mut self.storage[node.0]
    }

    #[inline]
    pub(crate) fn is_red(&self, node: NodeIndex) -> bool {
        !node.is_nil() && self.get_node_by_idx(node).is_red()
    }

    pub(crate) fn check_handle(&self, node: NodeIndex) -> TreeResult<()> {
        if node.0 < self.storage.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(node))
        }
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Inserts `value` without rebalancing and returns the handle of the new
    /// node.
    pub fn insert(&mut self, value: T) -> NodeIndex {
        let mut current_node = self.root;
        let mut parent_node = NodeIndex::NIL;
        let mut goes_left = false;

        while !current_node.is_nil() {
            parent_node = current_node;
            let curr_node_storage = self.get_node_by_idx(current_node);

            goes_left = value <= curr_node_storage.value;
            current_node = if goes_left {
                curr_node_storage.left
            } else {
                curr_node_storage.right
            };
        }

        let new_node_pos = NodeIndex(self.storage.len());
        let mut node = Node::new_isolated(value);
        node.parent = parent_node;
        self.storage.push(node);

        if parent_node.is_nil() {
            self.root = new_node_pos;
        } else if goes_left {
            self.get_node_by_idx_mut(parent_node).left = new_node_pos;
        } else {
            self.get_node_by_idx_mut(parent_node).right = new_node_pos;
        }

        trace!("inserted node {new_node_pos} under {parent_node}");

        new_node_pos
    }

    /// Inserts a possibly-absent value, rejecting `None`.
    pub fn try_insert(&mut self, value: Option<T>) -> TreeResult<NodeIndex> {
        value
            .map(|value| self.insert(value))
            .ok_or(TreeError::InvalidArgument)
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current_node = self.root;

        while !current_node.is_nil() {
            let curr_node_storage = self.get_node_by_idx(current_node);

            match value.cmp(&curr_node_storage.value) {
                Ordering::Less => current_node = curr_node_storage.left,
                Ordering::Equal => return true,
                Ordering::Greater => current_node = curr_node_storage.right,
            }
        }

        false
    }

    /// Ascending iterator restricted to the bounds configured on the tree at
    /// the time of the call.
    pub fn iter(&self) -> BoundedIter<'_, T> {
        BoundedIter::new(self, self.bounds.min.as_ref(), self.bounds.max.as_ref())
    }

    /// Ascending iterator restricted to `[min, max]`, ignoring the tree's
    /// configured bounds.
    pub fn range<'a>(&'a self, min: Option<&'a T>, max: Option<&'a T>) -> BoundedIter<'a, T> {
        BoundedIter::new(self, min, max)
    }

    /// Every value in ascending order, ignoring configured bounds.
    pub fn to_sorted_vec(&self) -> Vec<&T> {
        self.range(None, None).collect()
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len())
            .field("level_order", &self.to_level_order_vec())
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = BoundedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
