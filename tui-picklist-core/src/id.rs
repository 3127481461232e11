//! Stable item identities

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Stable 64-bit identity for a logical list item
///
/// An `ItemId` distinguishes one logical item from another across filtering
/// and persistence: positions shift whenever a filter is applied or the list
/// is repopulated, ids do not.
///
/// Ids are either supplied explicitly by the caller (see
/// [`SelectionStore::set_items_with_ids`](crate::SelectionStore::set_items_with_ids))
/// or derived from the item value with [`ItemId::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Derive an id from a value's hash.
    ///
    /// Deterministic for equal values, so repopulating a store with equal
    /// values yields the same ids across a filter or save/restore cycle.
    ///
    /// Note that two *distinct* values may hash to the same id. If that
    /// matters for your data, supply explicit ids instead of relying on the
    /// hash fallback.
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        value.hash(&mut hasher);
        ItemId(hasher.finish())
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        ItemId(raw)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
