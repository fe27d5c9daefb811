use log::trace;

use crate::error::{TreeError, TreeResult};
use crate::node::NodeIndex;
use crate::tree::OrderedTree;

impl<T> OrderedTree<T> {
    /// Moves `child` into the position of `parent`, keeping the BST order.
    ///
    /// A left child produces a right rotation, a right child a left rotation.
    /// Colors and values are left untouched. If `parent` was the root, `child`
    /// becomes the new root.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NullArgument`] if either handle is absent.
    /// - [`TreeError::UnknownNode`] if a handle does not belong to this tree.
    /// - [`TreeError::InvalidRelationship`] if `child` is not currently a child
    ///   of `parent`.
    pub fn rotate(
        &mut self,
        child: Option<NodeIndex>,
        parent: Option<NodeIndex>,
    ) -> TreeResult<()> {
        let (Some(child), Some(parent)) = (child, parent) else {
            return Err(TreeError::NullArgument);
        };

        self.check_handle(child)?;
        self.check_handle(parent)?;

        let parent_node = self.get_node_by_idx(parent);
        if parent_node.left != child && parent_node.right != child {
            return Err(TreeError::InvalidRelationship { child, parent });
        }

        self.rotate_pair(child, parent);

        Ok(())
    }

    /// Rotation on a pair already known to be linked.
    pub(crate) fn rotate_pair(&mut self, child: NodeIndex, parent: NodeIndex) {
        if self.get_node_by_idx(parent).left == child {
            self.rotate_right(parent);
        } else {
            debug_assert_eq!(self.get_node_by_idx(parent).right, child);
            self.rotate_left(parent);
        }
    }

    fn rotate_left(&mut self, center: NodeIndex) {
        let grandparent_idx = self.get_node_by_idx(center).parent;
        let sibling_idx = self.get_node_by_idx(center).right;

        let c_idx = self.get_node_by_idx(sibling_idx).left;

        self.get_node_by_idx_mut(center).right = c_idx;
        if !c_idx.is_nil() {
            self.get_node_by_idx_mut(c_idx).parent = center;
        }

        self.get_node_by_idx_mut(sibling_idx).left = center;
        self.get_node_by_idx_mut(center).parent = sibling_idx;
        self.replace_child(grandparent_idx, center, sibling_idx);

        trace!("rotated {sibling_idx} left over {center}");
    }

    fn rotate_right(&mut self, center: NodeIndex) {
        let grandparent_idx = self.get_node_by_idx(center).parent;
        let sibling_idx = self.get_node_by_idx(center).left;

        let c_idx = self.get_node_by_idx(sibling_idx).right;

        self.get_node_by_idx_mut(center).left = c_idx;
        if !c_idx.is_nil() {
            self.get_node_by_idx_mut(c_idx).parent = center;
        }

        self.get_node_by_idx_mut(sibling_idx).right = center;
        self.get_node_by_idx_mut(center).parent = sibling_idx;
        self.replace_child(grandparent_idx, center, sibling_idx);

        trace!("rotated {sibling_idx} right over {center}");
    }

    /// Points the link `grandparent -> old` at `new`, or the root if
    /// `grandparent` is nil.
    fn replace_child(&mut self, grandparent_idx: NodeIndex, old: NodeIndex, new: NodeIndex) {
        self.get_node_by_idx_mut(new).parent = grandparent_idx;

        if grandparent_idx.is_nil() {
            self.root = new;
            return;
        }

        let grandparent = self.get_node_by_idx_mut(grandparent_idx);
        if grandparent.right == old {
            grandparent.right = new;
        } else {
            grandparent.left = new;
        }
    }
}
