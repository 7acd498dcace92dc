use std::cmp::Ordering;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hlc::HlcTimestamp;
use crate::membership::MembershipStatus;
use crate::node::NodeId;

/// Versioned liveness statement for a single cluster node.
///
/// Records are replaced wholesale, never mutated in place: whoever
/// persists them must reject a replacement that does not [`compare`]
/// strictly newer than the stored record, so that concurrent updates
/// from different cluster members converge on the same winner. A fully
/// decommissioned node keeps its last record as tombstone state.
///
/// [`compare`]: LivenessRecord::compare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivenessRecord {
    pub node_id: NodeId,
    /// Generation counter; bumped when the node restarts or is forcibly
    /// marked dead, invalidating leases/claims issued under the prior
    /// epoch.
    pub epoch: u64,
    /// The record stops being proof of liveness at this instant unless
    /// refreshed by a heartbeat.
    pub expiration: HlcTimestamp,
    /// True while the node is gracefully shedding load. Orthogonal to
    /// membership; no transition rules couple the two.
    pub draining: bool,
    pub membership: MembershipStatus,
}

impl LivenessRecord {
    /// The record written when a node first joins the cluster.
    pub fn bootstrap(node_id: NodeId, expiration: HlcTimestamp) -> Self {
        Self {
            node_id,
            epoch: 1,
            expiration,
            draining: false,
            membership: MembershipStatus::Active,
        }
    }

    /// True for the all-zero record, which no node can legitimately
    /// have observed.
    pub fn is_empty(&self) -> bool {
        *self == LivenessRecord::default()
    }

    /// Whether the node is considered live at the given time.
    ///
    /// NOTE: if the caller wants to know whether the record is valid
    /// right now, `now` should be the known high-water mark across all
    /// cluster clocks, not a raw local reading. If the record expires
    /// at 100, the local clock reads 90, but some peer's clock is known
    /// to read 110, it is preferable (more consistent across nodes) for
    /// the record to count as expired. A lagging local clock would
    /// otherwise yield a false "alive" verdict.
    pub fn is_live(&self, now: HlcTimestamp) -> bool {
        now < self.expiration
    }

    /// Whether the record expired more than `threshold` ago.
    ///
    /// Because of the threshold, `is_dead` is not the inverse of
    /// [`is_live`]: in `[expiration, expiration + threshold)` the node
    /// is neither provably live nor declared dead, tolerating transient
    /// clock skew and network delay before recovery kicks in.
    ///
    /// [`is_live`]: LivenessRecord::is_live
    pub fn is_dead(&self, now: HlcTimestamp, threshold: Duration) -> bool {
        now >= self.expiration.add_duration(threshold)
    }

    /// Total order over records of the same node, by recency.
    ///
    /// Epoch first: a higher epoch is always newer regardless of
    /// expiration, since an epoch bump means the node restarted or was
    /// force-failed. At equal epoch, the causally later expiration wins
    /// (a successful heartbeat refresh). Equal on both means `Equal`
    /// even when `draining` or `membership` differ; callers that care
    /// about field-level changes compare those fields themselves. A
    /// named method rather than `Ord`, precisely because `Equal` does
    /// not imply `==`.
    pub fn compare(&self, other: &LivenessRecord) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.expiration.cmp(&other.expiration))
    }
}

impl std::fmt::Display for LivenessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "liveness({} epoch:{} exp:{}",
            self.node_id, self.epoch, self.expiration
        )?;
        if self.draining || !self.membership.is_active() {
            write!(f, " drain:{} membership:{}", self.draining, self.membership)?;
        }
        write!(f, ")")
    }
}
