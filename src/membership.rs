use serde::{Deserialize, Serialize};

use crate::error::TransitionError;
use crate::liveness::LivenessRecord;

/// A node's place in the cluster's decommissioning lifecycle.
///
/// Closed enumeration: exactly these three states exist. Every match
/// over it is exhaustive; an out-of-range value can only enter through
/// wire decoding, where it is a fatal bug (see [`from_wire`]).
///
/// [`from_wire`]: MembershipStatus::from_wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Full member of the cluster.
    #[default]
    Active,
    /// Being drained of data, can still be recommissioned.
    Decommissioning,
    /// Permanently removed. Terminal state.
    Decommissioned,
}

impl MembershipStatus {
    pub fn is_active(self) -> bool {
        self == MembershipStatus::Active
    }

    pub fn is_decommissioning(self) -> bool {
        self == MembershipStatus::Decommissioning
    }

    pub fn is_decommissioned(self) -> bool {
        self == MembershipStatus::Decommissioned
    }

    /// Decode a membership status from its wire representation.
    ///
    /// Panics on an out-of-range value: that is a construction or
    /// decoding bug, not a runtime condition to recover from.
    pub fn from_wire(value: u8) -> Self {
        match value {
            0 => MembershipStatus::Active,
            1 => MembershipStatus::Decommissioning,
            2 => MembershipStatus::Decommissioned,
            _ => panic!(
                "unknown membership status {}, expected one of [active,decommissioning,decommissioned]",
                value
            ),
        }
    }

    /// The wire representation, inverse of [`from_wire`].
    ///
    /// [`from_wire`]: MembershipStatus::from_wire
    pub fn to_wire(self) -> u8 {
        match self {
            MembershipStatus::Active => 0,
            MembershipStatus::Decommissioning => 1,
            MembershipStatus::Decommissioned => 2,
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // NB: These strings must not be changed, operator tooling
        // matches on them.
        let s = match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Decommissioning => "decommissioning",
            MembershipStatus::Decommissioned => "decommissioned",
        };
        f.write_str(s)
    }
}

/// Validate a proposed membership transition against the last known
/// record for the node. Ignoring no-ops (which also include
/// decommissioning a decommissioned node), the valid transitions are:
///
/// ```text
/// Active          => Decommissioning
/// Decommissioning => Active           (recommission)
/// Decommissioning => Decommissioned
/// ```
///
/// Returns `Ok(true)` if the transition should be applied, `Ok(false)`
/// if it is unnecessary (a no-op), and a failed-precondition error if
/// it is invalid. Pure: nothing is mutated or persisted; callers apply
/// the new record only after `Ok(true)`.
///
/// Panics if `old` is an empty record: transitions are only ever
/// validated against a previously established record, so an empty one
/// is a caller bug.
pub fn validate_transition(
    old: &LivenessRecord,
    new_status: MembershipStatus,
) -> Result<bool, TransitionError> {
    assert!(
        !old.is_empty(),
        "invalid old liveness record; found to be empty"
    );

    if old.membership == new_status {
        // No-op.
        return Ok(false);
    }

    if old.membership.is_decommissioned() && new_status.is_decommissioning() {
        // No-op as it would just move directly back to decommissioned.
        return Ok(false);
    }

    if new_status.is_active() && !old.membership.is_decommissioning() {
        return Err(TransitionError::NotDecommissioning {
            node_id: old.node_id,
            current: old.membership,
        });
    }

    // A move into decommissioning is legal from every prior state, so
    // there is no check for it here (the no-op cases above already
    // covered the rest).

    if new_status.is_decommissioned() && !old.membership.is_decommissioning() {
        return Err(TransitionError::SkippedDecommissioning {
            node_id: old.node_id,
            current: old.membership,
        });
    }

    Ok(true)
}
