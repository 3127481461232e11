//! Ratatui components for tui-picklist
//!
//! The presentation surface over
//! [`tui-picklist-core`](tui_picklist_core): components render the store's
//! visible projection and report user intents as actions, never touching the
//! store themselves. The embedding application owns the store, applies the
//! actions, and re-renders.
//!
//! # Components
//!
//! - [`ChoiceList`] - checkable list bound to a selection store
//! - [`FilterInput`] - search box emitting the constraint per keystroke
//! - [`ListDialog`] - modal dialog composing both, with gated commit
//!
//! # Example
//!
//! ```ignore
//! use tui_picklist_components::{centered_rect, DialogChoice, DialogFocus, ListDialog};
//!
//! let mut dialog = ListDialog::new("Pick colors")
//!     .choice(DialogChoice::Multiple)
//!     .choice_min(1)
//!     .filterable(true);
//!
//! // In your render function, after drawing the background:
//! let area = centered_rect(50, 16, frame.area());
//! dialog.render(frame, area, ListDialogProps {
//!     store: &state.store,
//!     cursor: state.cursor,
//!     filter: &state.filter,
//!     focus: state.focus,
//!     on_cursor: Action::Cursor,
//!     on_toggle: Action::Toggle,
//!     on_filter: Action::Filter,
//!     on_filter_clear: || Action::FilterClear,
//!     on_focus: Action::Focus,
//!     on_commit: Action::Commit,
//!     on_cancel: || Action::Cancel,
//! });
//! ```

mod choice_list;
mod component;
mod dialog;
mod filter_input;
pub mod testing;

pub use choice_list::{ChoiceList, ChoiceListProps};
pub use component::Component;
pub use dialog::{
    centered_rect, DialogChoice, DialogFlags, DialogFocus, ListDialog, ListDialogProps,
};
pub use filter_input::{FilterInput, FilterInputProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        centered_rect, ChoiceList, ChoiceListProps, Component, DialogChoice, DialogFlags,
        DialogFocus, FilterInput, FilterInputProps, ListDialog, ListDialogProps,
    };
}
