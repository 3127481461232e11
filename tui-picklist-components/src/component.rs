//! Component trait for pure UI elements

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A pure UI component that renders based on props and emits actions
///
/// Props carry all read-only data needed for a frame; `handle_key` returns
/// actions and never mutates external state. Internal UI state (scroll
/// offset, cursor column) may live in `&mut self`, but data mutations — in
/// particular anything touching a
/// [`SelectionStore`](tui_picklist_core::SelectionStore) — must go through
/// the actions a component emits, applied by the embedding application.
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>
    where
        Self: 'a;

    /// Handle a key event and return actions to dispatch
    ///
    /// Returns any `IntoIterator<Item = A>`: `None` for no actions,
    /// `Some(action)` for one, a `Vec` for several. The default
    /// implementation emits nothing (render-only components).
    #[allow(unused_variables)]
    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
