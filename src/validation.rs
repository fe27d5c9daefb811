//! Invariant checks over the arena and the tree shape.
//!
//! These walk the whole tree and are meant for tests and debugging, not for
//! the hot path.

use alloc::vec::Vec;

use crate::error::{TreeError, TreeResult};
use crate::node::NodeIndex;
use crate::tree::OrderedTree;

impl<T> OrderedTree<T> {
    /// Number of nodes reachable from the root.
    pub fn count_reachable(&self) -> usize {
        let mut count = 0;
        let mut stack = Vec::new();

        if !self.root.is_nil() {
            stack.push(self.root);
        }

        while let Some(idx) = stack.pop() {
            count += 1;
            let node = self.get_node_by_idx(idx);

            for child in [node.left, node.right] {
                if !child.is_nil() {
                    stack.push(child);
                }
            }
        }

        count
    }

    /// Every child points back at its parent and the root has no parent.
    pub fn check_parent_links(&self) -> TreeResult<()> {
        if self.root.is_nil() {
            return Ok(());
        }

        let root_parent = self.get_node_by_idx(self.root).parent;
        if !root_parent.is_nil() {
            return Err(TreeError::invariant(
                "parent links",
                &format!("root {} has parent {}", self.root, root_parent),
            ));
        }

        let mut stack = alloc::vec![self.root];

        while let Some(idx) = stack.pop() {
            let node = self.get_node_by_idx(idx);

            for child in [node.left, node.right] {
                if child.is_nil() {
                    continue;
                }
                self.check_handle(child)?;

                let back_link = self.get_node_by_idx(child).parent;
                if back_link != idx {
                    return Err(TreeError::invariant(
                        "parent links",
                        &format!("{child} is a child of {idx} but points at {back_link}"),
                    ));
                }
                stack.push(child);
            }
        }

        Ok(())
    }

    /// The arena holds exactly the nodes reachable from the root.
    pub fn check_arena_consistency(&self) -> TreeResult<()> {
        let reachable = self.count_reachable();

        if reachable != self.len() {
            return Err(TreeError::invariant(
                "arena consistency",
                &format!("{reachable} reachable nodes vs {} in arena", self.len()),
            ));
        }

        Ok(())
    }

    /// Root is black, no red node has a red parent, and every path to a nil
    /// leaf crosses the same number of black nodes. Returns the black height
    /// of the root.
    pub fn check_red_black(&self) -> TreeResult<usize> {
        if self.is_red(self.root) {
            return Err(TreeError::invariant(
                "red-black",
                &format!("root {} is red", self.root),
            ));
        }

        self.black_height(self.root)
    }

    fn black_height(&self, idx: NodeIndex) -> TreeResult<usize> {
        if idx.is_nil() {
            return Ok(0);
        }

        let node = self.get_node_by_idx(idx);

        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(TreeError::invariant(
                "red-black",
                &format!("red node {idx} has a red child"),
            ));
        }

        let left = self.black_height(node.left)?;
        let right = self.black_height(node.right)?;

        if left != right {
            return Err(TreeError::invariant(
                "red-black",
                &format!("black height under {idx} is {left} on the left, {right} on the right"),
            ));
        }

        Ok(left + usize::from(!node.is_red()))
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Left subtrees hold values `<=` their ancestor, right subtrees values
    /// `>=` it.
    ///
    /// Insertion alone keeps right subtrees strictly greater, but a rotation
    /// over two equal values moves one of them to the right of the other.
    pub fn check_order(&self) -> TreeResult<()> {
        // (node, lower bound, upper bound), both inclusive
        let mut stack: Vec<(NodeIndex, Option<&T>, Option<&T>)> = Vec::new();

        if !self.root.is_nil() {
            stack.push((self.root, None, None));
        }

        while let Some((idx, lower, upper)) = stack.pop() {
            let node = self.get_node_by_idx(idx);

            if lower.is_some_and(|lower| node.value < *lower)
                || upper.is_some_and(|upper| node.value > *upper)
            {
                return Err(TreeError::invariant(
                    "order",
                    &format!("node {idx} is out of place"),
                ));
            }

            if !node.left.is_nil() {
                stack.push((node.left, lower, Some(&node.value)));
            }
            if !node.right.is_nil() {
                stack.push((node.right, Some(&node.value), upper));
            }
        }

        Ok(())
    }

    /// Checks arena consistency, parent links and ordering. Colors are not
    /// inspected.
    pub fn validate(&self) -> TreeResult<()> {
        self.check_parent_links()?;
        self.check_arena_consistency()?;
        self.check_order()
    }
}

#[cfg(test)]
mod tests {
    use crate::node::NodeColor;
    use crate::{OrderedTree, RedBlackTree, TreeError};

    #[test]
    pub fn valid_trees_pass() {
        let tree: OrderedTree<i32> = [4, 2, 6, 2, 5].into_iter().collect();
        tree.validate().unwrap();
        assert_eq!(tree.count_reachable(), 5);

        let tree: RedBlackTree<i32> = (0..100).collect();
        tree.validate().unwrap();
        assert!(tree.as_tree().check_red_black().unwrap() >= 4);
    }

    #[test]
    pub fn empty_tree_is_valid() {
        let tree = RedBlackTree::<u8>::new();
        tree.validate().unwrap();
        assert_eq!(tree.as_tree().check_red_black(), Ok(0));
    }

    #[test]
    pub fn detects_red_root() {
        // plain inserts leave every node red
        let tree: OrderedTree<i32> = [1].into_iter().collect();

        assert!(matches!(
            tree.check_red_black(),
            Err(TreeError::InvariantViolation(_))
        ));
    }

    #[test]
    pub fn detects_red_red() {
        let mut tree: OrderedTree<i32> = [2, 1].into_iter().collect();
        let root = tree.root().unwrap();
        tree.get_node_by_idx_mut(root).color = NodeColor::Black;
        tree.insert(0);

        let err = tree.check_red_black().unwrap_err();
        assert!(err.to_string().contains("red child"));
    }

    #[test]
    pub fn detects_black_height_mismatch() {
        let mut tree: OrderedTree<i32> = [2, 1].into_iter().collect();
        for idx in [tree.root().unwrap(), tree.left(tree.root().unwrap()).unwrap()] {
            tree.get_node_by_idx_mut(idx).color = NodeColor::Black;
        }

        let err = tree.check_red_black().unwrap_err();
        assert!(err.to_string().contains("black height"));
    }

    #[test]
    pub fn detects_order_violation() {
        let mut tree: OrderedTree<i32> = [5, 3, 8].into_iter().collect();
        let left = tree.left(tree.root().unwrap()).unwrap();
        tree.get_node_by_idx_mut(left).value = 9;

        assert!(tree.check_order().is_err());
    }

    #[test]
    pub fn detects_broken_parent_link() {
        let mut tree: OrderedTree<i32> = [5, 3, 8].into_iter().collect();
        let root = tree.root().unwrap();
        let right = tree.right(root).unwrap();
        let left = tree.left(root).unwrap();
        tree.get_node_by_idx_mut(right).parent = left;

        assert!(tree.check_parent_links().is_err());
    }
}
