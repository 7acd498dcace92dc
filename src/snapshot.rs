use std::collections::HashMap;

use crate::hlc::HlcTimestamp;
use crate::liveness::LivenessRecord;
use crate::node::NodeId;

/// Liveness of a single node as of a specific reference time.
/// Snapshot artifact, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsLiveMapEntry {
    pub liveness: LivenessRecord,
    pub is_live: bool,
}

/// Point-in-time liveness view across the cluster, keyed by node id.
/// Rebuilt on demand, never incrementally mutated.
pub type IsLiveMap = HashMap<NodeId, IsLiveMapEntry>;

/// Build an [`IsLiveMap`] from the given records, evaluating each
/// against the single reference time `now` (which should be the
/// cluster-wide clock high-water mark, see
/// [`LivenessRecord::is_live`]). Deterministic: identical inputs yield
/// an identical map.
pub fn build_is_live_map(
    records: impl IntoIterator<Item = LivenessRecord>,
    now: HlcTimestamp,
) -> IsLiveMap {
    records
        .into_iter()
        .map(|liveness| {
            let is_live = liveness.is_live(now);
            (liveness.node_id, IsLiveMapEntry { liveness, is_live })
        })
        .collect()
}
