//! Vakt - node liveness records for clustered systems.
//!
//! The authoritative data model and validation rules for per-node
//! liveness: a versioned [`LivenessRecord`] with a total comparison
//! order, the membership state machine gating
//! active/decommissioning/decommissioned transitions, and the
//! point-in-time [`IsLiveMap`] snapshot. Persistence, heartbeating,
//! and gossip are external collaborators; this crate supplies the
//! primitives they build on.

pub mod error;
pub mod hlc;
pub mod liveness;
pub mod membership;
pub mod node;
pub mod snapshot;
pub mod storage;

// Re-exports for convenience
pub use error::{ErrorKind, StorageError, TransitionError};
pub use hlc::HlcTimestamp;
pub use liveness::LivenessRecord;
pub use membership::{validate_transition, MembershipStatus};
pub use node::NodeId;
pub use snapshot::{build_is_live_map, IsLiveMap, IsLiveMapEntry};
pub use storage::LivenessStore;

#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::InMemoryLivenessStore;
