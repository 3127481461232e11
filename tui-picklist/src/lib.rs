//! tui-picklist: selection-tracking, filterable list dialogs for Rust TUI apps
//!
//! A pick list keeps a consistent notion of *which logical items are
//! selected* while the visible set is dynamically filtered, while a
//! configurable choice discipline (none / exactly-one / many) is enforced,
//! and across a host's save/restore cycle. The model lives in
//! [`tui-picklist-core`](tui_picklist_core); ratatui components that render
//! it live in [`tui-picklist-components`](tui_picklist_components).
//!
//! # Example
//! ```
//! use tui_picklist::prelude::*;
//!
//! let mut store = SelectionStore::with_matcher(WordMatcher::default());
//! store.set_items(vec!["red".to_string(), "green".into(), "blue".into()]);
//! store.set_choice_mode(ChoiceMode::Multiple);
//!
//! store.toggle(1).unwrap();
//! store.set_filter(Some("bl"));
//!
//! assert_eq!(store.visible_len(), 1);
//! assert_eq!(store.checked_count(), 1);
//! ```

// Re-export everything from core, and the component surface by name (both
// crates carry a `testing` module; core's is the one exposed here)
pub use tui_picklist_components::{
    centered_rect, ChoiceList, ChoiceListProps, Component, DialogChoice, DialogFlags, DialogFocus,
    FilterInput, FilterInputProps, ListDialog, ListDialogProps,
};
pub use tui_picklist_core::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use tui_picklist_components::{
        centered_rect, ChoiceList, ChoiceListProps, Component, DialogChoice, DialogFlags,
        DialogFocus, FilterInput, FilterInputProps, ListDialog, ListDialogProps,
    };
    pub use tui_picklist_core::{
        ChoiceBounds, ChoiceMode, ItemId, Matcher, SelectError, SelectResult, Selection,
        SelectionSnapshot, SelectionStore, WordMatcher,
    };
}
