use core::fmt;

/// Handle to a node stored in a tree's arena.
///
/// Handles are only meaningful for the tree that produced them, and only until
/// that tree is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    pub(crate) const NIL: NodeIndex = NodeIndex(usize::MAX);

    #[inline]
    pub(crate) fn is_nil(self) -> bool {
        self == Self::NIL
    }

    /// Converts the internal sentinel into `None`.
    #[inline]
    pub(crate) fn to_option(self) -> Option<NodeIndex> {
        if self.is_nil() { None } else { Some(self) }
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            write!(f, "#nil")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeColor {
    #[default]
    Red,
    Black,
}

impl NodeColor {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            NodeColor::Red => NodeColor::Black,
            NodeColor::Black => NodeColor::Red,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: NodeColor,
    pub(crate) parent: NodeIndex,
    pub(crate) left: NodeIndex,
    pub(crate) right: NodeIndex,
}

impl<T> Node<T> {
    pub(crate) fn new_isolated(value: T) -> Self {
        Self {
            value,
            color: NodeColor::default(),
            parent: NodeIndex::NIL,
            left: NodeIndex::NIL,
            right: NodeIndex::NIL,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        matches!(self.color, NodeColor::Red)
    }

    pub(crate) fn flip_color(&mut self) {
        self.color = self.color.flipped();
    }
}
