use std::time::Duration;

use vakt::{
    build_is_live_map, validate_transition, HlcTimestamp, InMemoryLivenessStore, LivenessRecord,
    LivenessStore, MembershipStatus, NodeId,
};

/// Helper to build a reference "now" timestamp.
fn at(wall: u64) -> HlcTimestamp {
    HlcTimestamp::new(wall, 0, NodeId(0))
}

// ============================================================================
// Decommission / recommission workflow against the store
// ============================================================================

#[test]
fn test_full_decommission_workflow() {
    let store = InMemoryLivenessStore::new();

    let mut record = LivenessRecord::bootstrap(NodeId(1), at(100));
    store.update(record).unwrap();

    // Operator starts a decommission.
    let old = store.get(NodeId(1)).unwrap().unwrap();
    assert_eq!(
        validate_transition(&old, MembershipStatus::Decommissioning),
        Ok(true)
    );
    record.membership = MembershipStatus::Decommissioning;
    record.expiration = at(200); // refreshed heartbeat carries the change
    store.update(record).unwrap();

    // Finalize once data has moved off the node.
    let old = store.get(NodeId(1)).unwrap().unwrap();
    assert_eq!(
        validate_transition(&old, MembershipStatus::Decommissioned),
        Ok(true)
    );
    record.membership = MembershipStatus::Decommissioned;
    record.expiration = at(300);
    store.update(record).unwrap();

    // The terminal record sticks around as a tombstone and can no
    // longer be recommissioned.
    let last = store.get(NodeId(1)).unwrap().unwrap();
    assert_eq!(last.membership, MembershipStatus::Decommissioned);
    let err = validate_transition(&last, MembershipStatus::Active).unwrap_err();
    assert_eq!(err.node_id(), NodeId(1));
}

#[test]
fn test_recommission_workflow() {
    let store = InMemoryLivenessStore::new();

    let mut record = LivenessRecord::bootstrap(NodeId(2), at(100));
    record.membership = MembershipStatus::Decommissioning;
    store.update(record).unwrap();

    let old = store.get(NodeId(2)).unwrap().unwrap();
    assert_eq!(validate_transition(&old, MembershipStatus::Active), Ok(true));

    record.membership = MembershipStatus::Active;
    record.expiration = at(200);
    store.update(record).unwrap();

    assert_eq!(
        store.get(NodeId(2)).unwrap().unwrap().membership,
        MembershipStatus::Active
    );
}

// ============================================================================
// Concurrent-update convergence through the compare gate
// ============================================================================

#[test]
fn test_concurrent_updates_converge_on_winner() {
    // Two cluster members race to write competing records for node 3:
    // a heartbeat refresh at epoch 1 and an epoch bump from a restart.
    let refresh = LivenessRecord {
        node_id: NodeId(3),
        epoch: 1,
        expiration: at(500),
        draining: false,
        membership: MembershipStatus::Active,
    };
    let restart = LivenessRecord {
        node_id: NodeId(3),
        epoch: 2,
        expiration: at(150),
        draining: false,
        membership: MembershipStatus::Active,
    };

    // Whichever order the writes land in, the epoch bump wins.
    for (first, second) in [(refresh, restart), (restart, refresh)] {
        let store = InMemoryLivenessStore::new();
        let _ = store.update(first);
        let _ = store.update(second);
        assert_eq!(store.get(NodeId(3)).unwrap(), Some(restart));
    }
}

// ============================================================================
// Snapshot over stored records
// ============================================================================

#[test]
fn test_snapshot_from_store() {
    let store = InMemoryLivenessStore::new();
    store
        .update(LivenessRecord::bootstrap(NodeId(1), at(200)))
        .unwrap();
    store
        .update(LivenessRecord::bootstrap(NodeId(2), at(50)))
        .unwrap();

    let map = build_is_live_map(store.get_all().unwrap(), at(100));

    assert_eq!(map.len(), 2);
    assert!(map[&NodeId(1)].is_live);
    assert!(!map[&NodeId(2)].is_live);

    // Node 2 sits in its grace window rather than being dead outright.
    let threshold = Duration::from_millis(100);
    assert!(!map[&NodeId(2)].liveness.is_dead(at(100), threshold));
    assert!(map[&NodeId(2)].liveness.is_dead(at(150), threshold));
}

// ============================================================================
// Encode/decode round trip
// ============================================================================

#[test]
fn test_record_survives_serde_round_trip() {
    let record = LivenessRecord {
        node_id: NodeId(9),
        epoch: 4,
        expiration: HlcTimestamp::new(12345, 6, NodeId(9)),
        draining: true,
        membership: MembershipStatus::Decommissioning,
    };

    let json = serde_json::to_string(&record).unwrap();
    let decoded: LivenessRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, record);
    // Status serializes as its stable lowercase name.
    assert!(json.contains("\"decommissioning\""));
}
