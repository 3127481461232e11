//! Checkable list over a selection store's visible projection

use std::fmt::Display;
use std::marker::PhantomData;
use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tui_picklist_core::{ChoiceMode, SelectionStore, WordMatcher};

use crate::component::Component;

/// Props for the [`ChoiceList`] component
pub struct ChoiceListProps<'a, T, A> {
    /// The store whose visible projection is rendered
    pub store: &'a SelectionStore<T>,
    /// Cursor position within the projection
    pub cursor: usize,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Text shown when no items are visible
    pub empty_text: Option<&'a str>,
    /// Highlight the active constraint inside row labels
    pub highlighter: Option<WordMatcher>,
    /// Draw a rule between rows
    pub show_divider: bool,
    /// Action for cursor movement
    pub on_cursor: fn(usize) -> A,
    /// Action for toggling the row under the cursor
    pub on_toggle: fn(usize) -> A,
}

/// A checkable, filterable list bound to a [`SelectionStore`]
///
/// Rows carry a check marker matching the store's choice mode: `[x]`
/// checkboxes under `Multiple`, `(*)` radio marks under `Single`, no marker
/// under `None`. Navigation is j/k/arrows/Home/End, space toggles the row
/// under the cursor. The component reads checked state by projected position
/// and emits exactly one toggle action per keypress; it never mutates the
/// store itself.
pub struct ChoiceList<T> {
    /// Scroll offset for the viewport
    scroll_offset: usize,
    _marker: PhantomData<T>,
}

impl<T> Default for ChoiceList<T> {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            _marker: PhantomData,
        }
    }
}

impl<T> ChoiceList<T> {
    /// Create a new ChoiceList
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor row inside the viewport
    fn ensure_visible(&mut self, cursor: usize, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + viewport_rows {
            self.scroll_offset = cursor.saturating_sub(viewport_rows - 1);
        }
    }
}

impl<T: Display, A> Component<A> for ChoiceList<T> {
    type Props<'a> = ChoiceListProps<'a, T, A> where Self: 'a;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.store.is_empty() {
            return None;
        }

        let last = props.store.visible_len() - 1;
        let cursor = props.cursor.min(last);

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = (cursor + 1).min(last);
                (next != cursor).then(|| (props.on_cursor)(next))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let next = cursor.saturating_sub(1);
                (next != cursor).then(|| (props.on_cursor)(next))
            }
            KeyCode::Char('g') | KeyCode::Home => (cursor != 0).then(|| (props.on_cursor)(0)),
            KeyCode::Char('G') | KeyCode::End => (cursor != last).then(|| (props.on_cursor)(last)),
            KeyCode::Char(' ') => Some((props.on_toggle)(cursor)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.store.is_empty() {
            let placeholder = Paragraph::new(props.empty_text.unwrap_or("No items"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, area);
            return;
        }

        let rows_per_item = if props.show_divider { 2 } else { 1 };
        let viewport_rows = (area.height as usize) / rows_per_item;
        let cursor = props.cursor.min(props.store.visible_len() - 1);
        self.ensure_visible(cursor, viewport_rows.max(1));

        let mode = props.store.choice_mode();
        let constraint = props.store.constraint();
        let visible_len = props.store.visible_len();

        let items: Vec<ListItem> = props
            .store
            .rows()
            .enumerate()
            .map(|(row, (value, checked))| {
                let label = value.to_string();
                let mut spans = vec![Span::raw(marker(mode, checked))];
                spans.extend(label_spans(&label, constraint, props.highlighter));

                if props.show_divider && row + 1 < visible_len {
                    let rule = "─".repeat(area.width as usize);
                    ListItem::new(vec![
                        Line::from(spans),
                        Line::styled(rule, Style::default().fg(Color::DarkGray)),
                    ])
                } else {
                    ListItem::new(Line::from(spans))
                }
            })
            .collect();

        let highlight = if props.is_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items).highlight_style(highlight);

        let mut state = ListState::default().with_selected(Some(cursor));
        *state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Check marker for a row, per choice mode
fn marker(mode: ChoiceMode, checked: bool) -> &'static str {
    match mode {
        ChoiceMode::Multiple => {
            if checked {
                "[x] "
            } else {
                "[ ] "
            }
        }
        ChoiceMode::Single => {
            if checked {
                "(*) "
            } else {
                "( ) "
            }
        }
        ChoiceMode::None => "",
    }
}

/// Split a label into spans, highlighting constraint matches
fn label_spans(
    label: &str,
    constraint: Option<&str>,
    highlighter: Option<WordMatcher>,
) -> Vec<Span<'static>> {
    let ranges = match (constraint, highlighter) {
        (Some(constraint), Some(matcher)) => matcher.match_ranges(label, constraint),
        _ => Vec::new(),
    };
    if ranges.is_empty() {
        return vec![Span::raw(label.to_owned())];
    }

    let matched = Style::default().fg(Color::Black).bg(Color::Yellow);
    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut at = 0;
    for Range { start, end } in ranges {
        if start > at {
            spans.push(Span::raw(label[at..start].to_owned()));
        }
        spans.push(Span::styled(label[start..end].to_owned(), matched));
        at = end;
    }
    if at < label.len() {
        spans.push(Span::raw(label[at..].to_owned()));
    }
    spans
}
