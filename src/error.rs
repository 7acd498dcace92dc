use thiserror::Error;

use crate::membership::MembershipStatus;
use crate::node::NodeId;

/// Coarse classification of recoverable errors, for callers that
/// branch on the class rather than the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was well-formed but the target is not in a state
    /// that permits it.
    FailedPrecondition,
}

/// Rejection of a proposed membership transition.
///
/// These are expected, recoverable outcomes of an invalid but
/// well-formed request; the caller is expected to branch on them
/// (e.g. an operator-initiated decommission surfacing an actionable
/// message). Invariant violations such as validating against an empty
/// record panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("can only recommission a decommissioning node; {node_id} found to be {current}")]
    NotDecommissioning {
        node_id: NodeId,
        current: MembershipStatus,
    },

    #[error(
        "can only fully decommission an already decommissioning node; {node_id} found to be {current}"
    )]
    SkippedDecommissioning {
        node_id: NodeId,
        current: MembershipStatus,
    },
}

impl TransitionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransitionError::NotDecommissioning { .. }
            | TransitionError::SkippedDecommissioning { .. } => ErrorKind::FailedPrecondition,
        }
    }

    /// The node the rejected transition was proposed for.
    pub fn node_id(&self) -> NodeId {
        match self {
            TransitionError::NotDecommissioning { node_id, .. }
            | TransitionError::SkippedDecommissioning { node_id, .. } => *node_id,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    /// An incoming record did not compare strictly newer than the
    /// stored one; the write must be dropped for convergence.
    #[error("stale liveness record for {0}: incoming record is not newer than stored")]
    StaleRecord(NodeId),

    #[error("storage backend error: {0}")]
    Backend(String),
}
