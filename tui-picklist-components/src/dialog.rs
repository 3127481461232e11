//! Modal list dialog: filter box, choice list and gated commit

use std::fmt::Display;

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_picklist_core::{
    ChoiceBounds, ChoiceMode, ItemId, SelectResult, Selection, SelectionStore, WordMatcher,
};

use crate::choice_list::{ChoiceList, ChoiceListProps};
use crate::component::Component;
use crate::filter_input::{FilterInput, FilterInputProps};

bitflags! {
    /// Presentation options for a [`ListDialog`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DialogFlags: u8 {
        /// Show a filter box above the list
        const FILTERABLE = 1 << 0;
        /// Highlight constraint matches inside row labels
        const HIGHLIGHT = 1 << 1;
        /// Draw a rule between rows
        const DIVIDER = 1 << 2;
    }
}

/// Choice behavior of a [`ListDialog`]
///
/// `SingleDirect` is single choice where the first check commits the dialog
/// immediately, with no confirm button shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogChoice {
    /// Rows cannot be checked
    None,
    /// One row may be checked; commit via the confirm button
    Single,
    /// One row may be checked; checking commits immediately
    SingleDirect,
    /// Any number of rows may be checked
    #[default]
    Multiple,
}

impl DialogChoice {
    /// The store-level cardinality discipline this dialog mode maps to
    pub fn store_mode(self) -> ChoiceMode {
        match self {
            DialogChoice::None => ChoiceMode::None,
            DialogChoice::Single | DialogChoice::SingleDirect => ChoiceMode::Single,
            DialogChoice::Multiple => ChoiceMode::Multiple,
        }
    }
}

/// Which part of the dialog receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    /// The filter box
    Filter,
    /// The list body
    List,
}

impl DialogFocus {
    /// The other focus target
    pub fn other(self) -> Self {
        match self {
            DialogFocus::Filter => DialogFocus::List,
            DialogFocus::List => DialogFocus::Filter,
        }
    }
}

/// Props for the [`ListDialog`] component
pub struct ListDialogProps<'a, T, A> {
    /// The store backing the dialog
    pub store: &'a SelectionStore<T>,
    /// Cursor position within the visible projection
    pub cursor: usize,
    /// Current filter text
    pub filter: &'a str,
    /// Which child receives keystrokes
    pub focus: DialogFocus,
    /// Action for cursor movement
    pub on_cursor: fn(usize) -> A,
    /// Action for toggling the row under the cursor
    pub on_toggle: fn(usize) -> A,
    /// Action for a changed filter constraint
    pub on_filter: fn(String) -> A,
    /// Action for clearing the filter constraint
    pub on_filter_clear: fn() -> A,
    /// Action for moving focus between filter and list
    pub on_focus: fn(DialogFocus) -> A,
    /// Action carrying the committed selection
    pub on_commit: fn(Selection) -> A,
    /// Action for dismissing the dialog without a result
    pub on_cancel: fn() -> A,
}

/// A modal dialog that displays a checkable, filterable list
///
/// Built builder-style, then driven through props and action callbacks like
/// any other component:
///
/// ```
/// use tui_picklist_components::{DialogChoice, ListDialog};
///
/// let dialog: ListDialog<String> = ListDialog::new("Pick colors")
///     .choice(DialogChoice::Multiple)
///     .choice_min(1)
///     .choice_max(3)
///     .filterable(true)
///     .highlight(true)
///     .empty_text("Nothing matches");
/// ```
///
/// Key routing: Tab moves focus between filter and list, Enter commits when
/// the checked count passes the configured bounds (and is swallowed
/// otherwise), Esc clears a non-empty filter first and cancels after.
/// Up/Down always reach the list, so the view can be narrowed and navigated
/// without leaving the filter box.
///
/// The dialog never mutates the store. Apply the emitted actions in the
/// embedding application, and call [`apply_to`](ListDialog::apply_to) once
/// after populating the store to install the choice mode and any presets.
/// Under [`DialogChoice::SingleDirect`], commit as soon as a toggle action
/// leaves the store non-empty (see [`direct_commit`](ListDialog::direct_commit)).
pub struct ListDialog<T> {
    title: String,
    choice: DialogChoice,
    bounds: ChoiceBounds,
    flags: DialogFlags,
    empty_text: Option<String>,
    preset_ids: Vec<ItemId>,
    preset_positions: Vec<usize>,
    filter_input: FilterInput,
    list: ChoiceList<T>,
}

impl<T> ListDialog<T> {
    /// Create a dialog with the given title and default behavior
    /// (multi-choice, unbounded, no filter box)
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            choice: DialogChoice::default(),
            bounds: ChoiceBounds::unbounded(),
            flags: DialogFlags::empty(),
            empty_text: None,
            preset_ids: Vec::new(),
            preset_positions: Vec::new(),
            filter_input: FilterInput::new(),
            list: ChoiceList::new(),
        }
    }

    /// Set the choice behavior
    pub fn choice(mut self, choice: DialogChoice) -> Self {
        self.choice = choice;
        self
    }

    /// Minimum required checked count for the confirm button
    pub fn choice_min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Maximum allowed checked count for the confirm button
    pub fn choice_max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Show a filter box above the list
    pub fn filterable(mut self, enabled: bool) -> Self {
        self.flags.set(DialogFlags::FILTERABLE, enabled);
        self
    }

    /// Highlight constraint matches inside row labels
    pub fn highlight(mut self, enabled: bool) -> Self {
        self.flags.set(DialogFlags::HIGHLIGHT, enabled);
        self
    }

    /// Draw a rule between rows
    pub fn divider(mut self, enabled: bool) -> Self {
        self.flags.set(DialogFlags::DIVIDER, enabled);
        self
    }

    /// Text shown when no items are visible
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = Some(text.into());
        self
    }

    /// Initially checked items, by id
    pub fn preset_ids(mut self, ids: Vec<ItemId>) -> Self {
        self.preset_ids = ids;
        self
    }

    /// Initially checked items, by position
    ///
    /// Positions are applied before any filter exists, so they address the
    /// backing order.
    pub fn preset_positions(mut self, positions: Vec<usize>) -> Self {
        self.preset_positions = positions;
        self
    }

    /// Install this dialog's choice mode and presets on a freshly populated
    /// store
    ///
    /// Call once after `set_items*`, before the first render. Fails if a
    /// preset position is out of range; unknown preset ids are skipped (they
    /// may refer to items no longer present).
    pub fn apply_to(&self, store: &mut SelectionStore<T>) -> SelectResult<()> {
        store.set_choice_mode(self.choice.store_mode());
        for &id in &self.preset_ids {
            store.set_checked_by_id(id, true);
        }
        for &position in &self.preset_positions {
            store.set_checked(position, true)?;
        }
        Ok(())
    }

    /// Whether checking a row should commit the dialog immediately
    ///
    /// After applying a toggle action under this mode, commit with
    /// [`SelectionStore::selection`] as soon as
    /// [`SelectionStore::checked_count`] is non-zero.
    pub fn direct_commit(&self) -> bool {
        self.choice == DialogChoice::SingleDirect
    }

    /// Whether the confirm action is currently permitted
    pub fn commit_enabled(&self, store: &SelectionStore<T>) -> bool {
        store.commit_enabled(&self.bounds)
    }

    /// The configured bounds on the checked count
    pub fn bounds(&self) -> ChoiceBounds {
        self.bounds
    }

    fn is_filterable(&self) -> bool {
        self.flags.contains(DialogFlags::FILTERABLE)
    }

    /// Focus as actually routed: without a filter box the list always has it
    fn effective_focus(&self, requested: DialogFocus) -> DialogFocus {
        if self.is_filterable() {
            requested
        } else {
            DialogFocus::List
        }
    }

    fn footer(&self, store: &SelectionStore<T>) -> Line<'static> {
        let cancel = Span::raw("[ Cancel ]");
        if self.direct_commit() {
            return Line::from(cancel);
        }
        let ok_style = if self.commit_enabled(store) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled("[ OK ]", ok_style),
            Span::raw("   "),
            cancel,
        ])
    }
}

impl<T: Display, A> Component<A> for ListDialog<T> {
    type Props<'a> = ListDialogProps<'a, T, A> where Self: 'a;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        let focus = self.effective_focus(props.focus);

        match key.code {
            KeyCode::Tab | KeyCode::BackTab if self.is_filterable() => {
                vec![(props.on_focus)(focus.other())]
            }
            KeyCode::Enter => {
                if self.commit_enabled(props.store) {
                    vec![(props.on_commit)(props.store.selection())]
                } else {
                    Vec::new()
                }
            }
            KeyCode::Esc => {
                if focus == DialogFocus::Filter && !props.filter.is_empty() {
                    vec![(props.on_filter_clear)()]
                } else {
                    vec![(props.on_cancel)()]
                }
            }
            // the list stays navigable while the filter box has focus
            KeyCode::Up | KeyCode::Down => {
                let list_props = list_props(self.empty_text.as_deref(), self.flags, &props, true);
                self.list.handle_key(key, list_props).into_iter().collect()
            }
            _ => match focus {
                DialogFocus::Filter => {
                    let input_props = filter_props(&props, true);
                    self.filter_input
                        .handle_key(key, input_props)
                        .into_iter()
                        .collect()
                }
                DialogFocus::List => {
                    let list_props =
                        list_props(self.empty_text.as_deref(), self.flags, &props, true);
                    self.list.handle_key(key, list_props).into_iter().collect()
                }
            },
        }
    }

    /// Render the dialog into `area` (typically a [`centered_rect`])
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let focus = self.effective_focus(props.focus);

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(self.title.clone());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (input_area, list_area, footer_area) = if self.is_filterable() {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(inner);
            (Some(sections[0]), sections[1], sections[2])
        } else {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);
            (None, sections[0], sections[1])
        };

        if let Some(input_area) = input_area {
            let input_props = filter_props(&props, focus == DialogFocus::Filter);
            self.filter_input.render(frame, input_area, input_props);
        }

        let list_props = list_props(
            self.empty_text.as_deref(),
            self.flags,
            &props,
            focus == DialogFocus::List,
        );
        self.list.render(frame, list_area, list_props);

        let footer = self.footer(props.store);
        frame.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            footer_area,
        );
    }
}

fn filter_props<'a, T, A>(
    props: &ListDialogProps<'a, T, A>,
    is_focused: bool,
) -> FilterInputProps<'a, A> {
    FilterInputProps {
        value: props.filter,
        placeholder: "Type to filter…",
        is_focused,
        visible_count: props.store.visible_len(),
        total_count: props.store.backing_len(),
        on_change: props.on_filter,
        on_clear: props.on_filter_clear,
    }
}

fn list_props<'a, T, A>(
    empty_text: Option<&'a str>,
    flags: DialogFlags,
    props: &ListDialogProps<'a, T, A>,
    is_focused: bool,
) -> ChoiceListProps<'a, T, A> {
    ChoiceListProps {
        store: props.store,
        cursor: props.cursor,
        is_focused,
        empty_text,
        highlighter: flags
            .contains(DialogFlags::HIGHLIGHT)
            .then(WordMatcher::default),
        show_divider: flags.contains(DialogFlags::DIVIDER),
        on_cursor: props.on_cursor,
        on_toggle: props.on_toggle,
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, key, RenderHarness};
    use tui_picklist_core::testing::labeled_store;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Cursor(usize),
        Toggle(usize),
        Filter(String),
        FilterClear,
        Focus(DialogFocus),
        Commit(Selection),
        Cancel,
    }

    fn dialog() -> ListDialog<String> {
        ListDialog::new("Pick")
            .choice(DialogChoice::Multiple)
            .filterable(true)
    }

    fn props<'a>(
        store: &'a SelectionStore<String>,
        filter: &'a str,
        focus: DialogFocus,
    ) -> ListDialogProps<'a, String, TestAction> {
        ListDialogProps {
            store,
            cursor: 0,
            filter,
            focus,
            on_cursor: TestAction::Cursor,
            on_toggle: TestAction::Toggle,
            on_filter: TestAction::Filter,
            on_filter_clear: || TestAction::FilterClear,
            on_focus: TestAction::Focus,
            on_commit: TestAction::Commit,
            on_cancel: || TestAction::Cancel,
        }
    }

    fn handle(
        dialog: &mut ListDialog<String>,
        key_event: &crossterm::event::KeyEvent,
        props: ListDialogProps<'_, String, TestAction>,
    ) -> Vec<TestAction> {
        dialog.handle_key(key_event, props).into_iter().collect()
    }

    #[test]
    fn test_enter_commits_when_gate_open() {
        let mut store = labeled_store(&["a", "b"]);
        store.set_checked(1, true).unwrap();
        let mut dialog = dialog().choice_min(1);

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Enter),
            props(&store, "", DialogFocus::List),
        );
        match &actions[..] {
            [TestAction::Commit(selection)] => {
                assert_eq!(selection.positions, vec![1]);
                assert_eq!(selection.ids, vec![ItemId(1)]);
            }
            other => panic!("expected a commit action, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_swallowed_when_gate_closed() {
        let store = labeled_store(&["a", "b"]);
        let mut dialog = dialog().choice_min(1);

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Enter),
            props(&store, "", DialogFocus::List),
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_esc_cancels_from_list() {
        let store = labeled_store(&["a"]);
        let mut dialog = dialog();

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Esc),
            props(&store, "", DialogFocus::List),
        );
        assert_eq!(actions, vec![TestAction::Cancel]);
    }

    #[test]
    fn test_esc_clears_filter_before_cancelling() {
        let store = labeled_store(&["a"]);
        let mut dialog = dialog();

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Esc),
            props(&store, "abc", DialogFocus::Filter),
        );
        assert_eq!(actions, vec![TestAction::FilterClear]);

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Esc),
            props(&store, "", DialogFocus::Filter),
        );
        assert_eq!(actions, vec![TestAction::Cancel]);
    }

    #[test]
    fn test_tab_switches_focus() {
        let store = labeled_store(&["a"]);
        let mut dialog = dialog();

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Tab),
            props(&store, "", DialogFocus::Filter),
        );
        assert_eq!(actions, vec![TestAction::Focus(DialogFocus::List)]);
    }

    #[test]
    fn test_tab_ignored_without_filter_box() {
        let store = labeled_store(&["a"]);
        let mut dialog = ListDialog::new("Pick").choice(DialogChoice::Multiple);

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Tab),
            props(&store, "", DialogFocus::List),
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_typing_reaches_filter() {
        let store = labeled_store(&["a"]);
        let mut dialog = dialog();

        // 'g' would be a jump-to-top in the list; with the filter focused it
        // must become constraint text instead
        let actions = handle(
            &mut dialog,
            &char_key('g'),
            props(&store, "", DialogFocus::Filter),
        );
        assert_eq!(actions, vec![TestAction::Filter("g".into())]);
    }

    #[test]
    fn test_arrows_reach_list_while_filter_focused() {
        let store = labeled_store(&["a", "b"]);
        let mut dialog = dialog();

        let actions = handle(
            &mut dialog,
            &key(KeyCode::Down),
            props(&store, "", DialogFocus::Filter),
        );
        assert_eq!(actions, vec![TestAction::Cursor(1)]);
    }

    #[test]
    fn test_space_toggles_in_list() {
        let store = labeled_store(&["a", "b"]);
        let mut dialog = dialog();

        let actions = handle(
            &mut dialog,
            &char_key(' '),
            props(&store, "", DialogFocus::List),
        );
        assert_eq!(actions, vec![TestAction::Toggle(0)]);
    }

    #[test]
    fn test_apply_to_installs_mode_and_presets() {
        let mut store = labeled_store(&["a", "b", "c"]);
        let dialog: ListDialog<String> = ListDialog::new("Pick")
            .choice(DialogChoice::Multiple)
            .preset_ids(vec![ItemId(2)])
            .preset_positions(vec![0]);

        dialog.apply_to(&mut store).unwrap();
        assert_eq!(store.choice_mode(), ChoiceMode::Multiple);
        assert_eq!(store.checked_positions(), vec![0, 2]);
    }

    #[test]
    fn test_apply_to_rejects_bad_preset_position() {
        let mut store = labeled_store(&["a"]);
        let dialog: ListDialog<String> = ListDialog::new("Pick").preset_positions(vec![5]);
        assert!(dialog.apply_to(&mut store).is_err());
    }

    #[test]
    fn test_apply_to_skips_unknown_preset_ids() {
        let mut store = labeled_store(&["a"]);
        let dialog: ListDialog<String> = ListDialog::new("Pick").preset_ids(vec![ItemId(99)]);
        dialog.apply_to(&mut store).unwrap();
        assert_eq!(store.checked_count(), 0);
    }

    #[test]
    fn test_single_direct_maps_to_single_mode() {
        let dialog: ListDialog<String> = ListDialog::new("Pick").choice(DialogChoice::SingleDirect);
        assert!(dialog.direct_commit());
        assert_eq!(dialog.choice.store_mode(), ChoiceMode::Single);
    }

    #[test]
    fn test_render_dialog_chrome() {
        let mut store = labeled_store(&["alpha", "beta"]);
        store.set_checked(0, true).unwrap();
        let mut dialog = dialog().choice_min(1);
        let mut harness = RenderHarness::new(40, 14);

        let output = harness.render_to_string(|frame| {
            let area = centered_rect(36, 12, frame.area());
            dialog.render(frame, area, props(&store, "", DialogFocus::List));
        });
        assert!(output.contains("Pick"));
        assert!(output.contains("[x] alpha"));
        assert!(output.contains("[ ] beta"));
        assert!(output.contains("[ OK ]"));
        assert!(output.contains("[ Cancel ]"));
    }

    #[test]
    fn test_render_direct_mode_hides_ok() {
        let store = labeled_store(&["alpha"]);
        let mut dialog: ListDialog<String> =
            ListDialog::new("Pick").choice(DialogChoice::SingleDirect);
        let mut harness = RenderHarness::new(40, 10);

        let output = harness.render_to_string(|frame| {
            let area = centered_rect(36, 8, frame.area());
            dialog.render(frame, area, props(&store, "", DialogFocus::List));
        });
        assert!(!output.contains("[ OK ]"));
        assert!(output.contains("[ Cancel ]"));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(40, 10, area);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 7);
        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let centered = centered_rect(100, 50, area);
        assert!(centered.width <= 28);
        assert!(centered.height <= 8);
    }
}
