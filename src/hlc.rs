use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Hybrid Logical Clock timestamp.
///
/// Provides causally consistent ordering across cluster nodes.
/// The ordering is: wall_time -> counter -> node_id (for deterministic
/// tie-breaking).
///
/// This crate only consumes timestamps; producing them from a physical
/// clock is the caller's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HlcTimestamp {
    /// Physical time component (milliseconds since epoch)
    pub wall_time: u64,
    /// Logical counter for events at same wall_time
    pub counter: u32,
    /// Node ID for deterministic tie-breaking
    pub node_id: NodeId,
}

impl HlcTimestamp {
    pub fn new(wall_time: u64, counter: u32, node_id: NodeId) -> Self {
        Self {
            wall_time,
            counter,
            node_id,
        }
    }

    /// Create a zero timestamp (useful for initialization).
    pub fn zero(node_id: NodeId) -> Self {
        Self {
            wall_time: 0,
            counter: 0,
            node_id,
        }
    }

    /// Return this timestamp shifted forward by a wall-clock duration.
    /// The logical counter and node id are preserved.
    pub fn add_duration(self, d: Duration) -> Self {
        Self {
            wall_time: self.wall_time.saturating_add(d.as_millis() as u64),
            ..self
        }
    }
}

impl Ord for HlcTimestamp {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.wall_time
            .cmp(&other.wall_time)
            .then(self.counter.cmp(&other.counter))
            .then(self.node_id.cmp(&other.node_id))
    }
}

impl PartialOrd for HlcTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for HlcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.wall_time, self.counter)
    }
}
