//! Persisted selection state
//!
//! The host owns persistence: on save it captures a
//! [`SelectionSnapshot`](crate::SelectionSnapshot) from the store, stows it in
//! whatever opaque state it keeps across destroy/recreate cycles, and on
//! restore repopulates the store and replays the snapshot. Snapshots are
//! keyed by item id, so they survive filtering and repopulation with equal
//! values.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// The checked set of a [`SelectionStore`](crate::SelectionStore), detached
/// from the store for persistence
///
/// Produced by [`SelectionStore::snapshot`](crate::SelectionStore::snapshot)
/// and replayed with [`SelectionStore::restore`](crate::SelectionStore::restore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    /// Ids of the checked items, in backing order at capture time
    pub checked_ids: Vec<ItemId>,
}

impl SelectionSnapshot {
    /// Whether the captured selection was empty
    pub fn is_empty(&self) -> bool {
        self.checked_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::labeled_store;

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut store = labeled_store(&["a", "b", "c"]);
        store.set_checked(0, true).unwrap();
        store.set_checked(2, true).unwrap();

        let snapshot = store.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: SelectionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);

        store.check_all(false);
        store.restore(&decoded);
        assert_eq!(store.checked_ids(), vec![ItemId(0), ItemId(2)]);
    }

    #[test]
    fn test_empty_snapshot() {
        let store = labeled_store(&["a"]);
        assert!(store.snapshot().is_empty());
    }
}
