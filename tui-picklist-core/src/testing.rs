//! Test utilities for selection stores
//!
//! Small constructors used by this crate's own tests and handy when testing
//! application reducers that drive a [`SelectionStore`].

use crate::filter::WordMatcher;
use crate::id::ItemId;
use crate::store::SelectionStore;

/// Build a string store with sequential ids `0..labels.len()` and the default
/// word matcher installed
pub fn labeled_store(labels: &[&str]) -> SelectionStore<String> {
    let items = labels.iter().map(|label| label.to_string()).collect();
    let ids = (0..labels.len() as u64).map(ItemId).collect();
    let mut store = SelectionStore::with_matcher(WordMatcher::default());
    store
        .set_items_with_ids(items, ids)
        .expect("labels and ids have equal length");
    store
}

/// Labels of the currently checked items, in backing order
pub fn checked_labels(store: &SelectionStore<String>) -> Vec<String> {
    store.checked_items().into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_store_ids_are_sequential() {
        let store = labeled_store(&["x", "y"]);
        assert_eq!(store.item_id(0).unwrap(), ItemId(0));
        assert_eq!(store.item_id(1).unwrap(), ItemId(1));
    }

    #[test]
    fn test_checked_labels() {
        let mut store = labeled_store(&["x", "y", "z"]);
        store.set_checked(2, true).unwrap();
        assert_eq!(checked_labels(&store), vec!["z"]);
    }
}
