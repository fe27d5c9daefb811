//! Ordered multiset containers built on an arena-backed binary search tree.
//!
//! [`OrderedTree`] is the plain, unbalanced tree; [`RedBlackTree`] repairs the
//! red-black invariants after every insertion using the rotation engine
//! exposed by [`OrderedTree::rotate`]. Both iterate in ascending order through
//! [`BoundedIter`], optionally restricted to an inclusive `[min, max]` range.
//!
//! Nodes are stored in a `Vec` and addressed by [`NodeIndex`]. Child links own,
//! the parent link is a plain index used for walking upward.
//!
//! ```
//! use redwood::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.extend([5, 10, 15, 15, 25]);
//! tree.set_iterator_min(Some(10));
//! tree.set_iterator_max(Some(20));
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 15, 15]);
//! ```

extern crate alloc;

mod bounds;
mod collection;
mod error;
mod iter;
mod node;
mod rbtree;
mod rotation;
mod tree;
mod validation;

pub use bounds::IterBounds;
pub use collection::SortedCollection;
pub use error::{TreeError, TreeResult};
pub use iter::BoundedIter;
pub use node::{NodeColor, NodeIndex};
pub use rbtree::RedBlackTree;
pub use tree::OrderedTree;
