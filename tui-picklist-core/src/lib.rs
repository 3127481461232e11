//! Core selection model for tui-picklist
//!
//! This crate provides the GUI-independent heart of a filterable pick list:
//! a store that tracks which logical items are checked even while the
//! visible item set is being filtered, under a configurable choice
//! discipline.
//!
//! # Core Concepts
//!
//! - **SelectionStore**: single source of truth for items, ids and checked
//!   flags; position-based operations address the visible projection, result
//!   queries answer in backing order
//! - **Matcher**: injected filter predicate deriving the visible projection
//! - **ChoiceMode**: cardinality discipline (none / single / multiple)
//! - **ChoiceBounds**: commit gating on the checked count
//! - **SelectionSnapshot**: persisted checked set for the host's
//!   save/restore cycle
//!
//! # Basic Example
//!
//! ```
//! use tui_picklist_core::{ChoiceBounds, ChoiceMode, SelectionStore, WordMatcher};
//!
//! let mut store = SelectionStore::with_matcher(WordMatcher::default());
//! store.set_items(vec!["alpha".to_string(), "beta".into(), "gamma".into()]);
//! store.set_choice_mode(ChoiceMode::Multiple);
//!
//! // the user checks two rows, then narrows the view
//! store.toggle(0).unwrap();
//! store.toggle(1).unwrap();
//! store.set_filter(Some("ga"));
//!
//! // off-screen items stay checked; the commit gate sees all of them
//! assert_eq!(store.visible_len(), 1);
//! assert_eq!(store.checked_count(), 2);
//! assert!(store.commit_enabled(&ChoiceBounds::between(1, 2)));
//! ```
//!
//! # Persistence
//!
//! The store performs no I/O. Hosts that survive destroy/recreate cycles
//! capture [`SelectionStore::snapshot`] on save, and on restore first
//! repopulate the store, then replay the snapshot:
//!
//! ```
//! # use tui_picklist_core::{SelectionStore, WordMatcher};
//! # let mut store = SelectionStore::with_matcher(WordMatcher::default());
//! # store.set_items(vec!["alpha".to_string(), "beta".into()]);
//! # store.toggle(1).unwrap();
//! let saved = store.snapshot();
//! // ... process death ...
//! store.set_items(vec!["alpha".to_string(), "beta".into()]);
//! store.restore(&saved);
//! assert_eq!(store.checked_count(), 1);
//! ```

pub mod choice;
pub mod error;
pub mod filter;
pub mod id;
pub mod snapshot;
pub mod store;
pub mod testing;

pub use choice::{ChoiceBounds, ChoiceMode};
pub use error::{SelectError, SelectResult};
pub use filter::{Matcher, WordMatcher};
pub use id::ItemId;
pub use snapshot::SelectionSnapshot;
pub use store::{Selection, SelectionStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::choice::{ChoiceBounds, ChoiceMode};
    pub use crate::error::{SelectError, SelectResult};
    pub use crate::filter::{Matcher, WordMatcher};
    pub use crate::id::ItemId;
    pub use crate::snapshot::SelectionSnapshot;
    pub use crate::store::{Selection, SelectionStore};
}
