use crate::error::StorageError;
use crate::liveness::LivenessRecord;
use crate::node::NodeId;

/// Storage boundary for liveness records.
///
/// Persistence itself lives outside this crate; implementations are
/// only required to honor the staleness gate on [`update`]: an
/// incoming record that does not [`LivenessRecord::compare`] strictly
/// newer than the stored one must be rejected with
/// [`StorageError::StaleRecord`]. That compare-and-swap-style guard is
/// what makes concurrent updates from different cluster members
/// converge on the same winner, and it is also why records for a node
/// never regress under `compare`.
///
/// [`update`]: LivenessStore::update
pub trait LivenessStore: Send + Sync {
    /// Get the last accepted record for a node.
    fn get(&self, node_id: NodeId) -> Result<Option<LivenessRecord>, StorageError>;

    /// Get the last accepted record of every known node, e.g. as input
    /// to [`crate::snapshot::build_is_live_map`].
    fn get_all(&self) -> Result<Vec<LivenessRecord>, StorageError>;

    /// Replace a node's record, subject to the staleness gate.
    fn update(&self, record: LivenessRecord) -> Result<(), StorageError>;
}

// In-memory implementation for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use super::*;

    /// In-memory liveness store for testing.
    #[derive(Default)]
    pub struct InMemoryLivenessStore {
        records: RwLock<HashMap<NodeId, LivenessRecord>>,
    }

    impl InMemoryLivenessStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl LivenessStore for InMemoryLivenessStore {
        fn get(&self, node_id: NodeId) -> Result<Option<LivenessRecord>, StorageError> {
            Ok(self.records.read().unwrap().get(&node_id).copied())
        }

        fn get_all(&self) -> Result<Vec<LivenessRecord>, StorageError> {
            Ok(self.records.read().unwrap().values().copied().collect())
        }

        fn update(&self, record: LivenessRecord) -> Result<(), StorageError> {
            let mut records = self.records.write().unwrap();

            if let Some(stored) = records.get(&record.node_id) {
                if record.compare(stored) != std::cmp::Ordering::Greater {
                    tracing::debug!(
                        "rejecting stale liveness write for {}: incoming {} vs stored {}",
                        record.node_id,
                        record,
                        stored
                    );
                    return Err(StorageError::StaleRecord(record.node_id));
                }
            }

            records.insert(record.node_id, record);
            Ok(())
        }
    }

}
