//! Error type and result alias for tree operations.

use thiserror::Error;

use crate::node::NodeIndex;

/// Error type for tree operations.
///
/// Every variant is fatal to the call that produced it; nothing is recovered
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An absent value was passed where a value is required.
    #[error("cannot insert an absent value")]
    InvalidArgument,

    /// A rotation was requested with an absent child or parent.
    #[error("neither the child nor the parent node can be absent")]
    NullArgument,

    /// A rotation was requested on two nodes that are not an immediate
    /// parent/child pair.
    #[error("node {child} is not a child of node {parent}")]
    InvalidRelationship { child: NodeIndex, parent: NodeIndex },

    /// `next` was called on an iterator with no remaining values.
    #[error("iterator has no remaining values")]
    ExhaustedIterator,

    /// The handle does not refer to a node of this tree.
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeIndex),

    /// A structural invariant does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl TreeError {
    pub(crate) fn invariant(check: &str, details: &str) -> Self {
        Self::InvariantViolation(format!("{check}: {details}"))
    }

    /// Natural end of an iteration, as opposed to any other failure.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::ExhaustedIterator)
    }

    /// Misuse of the rotation primitive.
    #[must_use]
    pub fn is_rotation_error(&self) -> bool {
        matches!(
            self,
            Self::NullArgument | Self::InvalidRelationship { .. } | Self::UnknownNode(_)
        )
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
