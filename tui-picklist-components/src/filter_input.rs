//! Filter box for narrowing a list dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::component::Component;

/// Props for the [`FilterInput`] component
pub struct FilterInputProps<'a, A> {
    /// Current constraint text
    pub value: &'a str,
    /// Placeholder shown while empty
    pub placeholder: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Currently visible item count, shown in the badge
    pub visible_count: usize,
    /// Total backing item count, shown in the badge
    pub total_count: usize,
    /// Action for every change of the constraint text
    pub on_change: fn(String) -> A,
    /// Action for clearing the constraint (Esc / Ctrl+U)
    pub on_clear: fn() -> A,
}

/// Single-line search box emitting the constraint on every keystroke
///
/// The border badge shows how many items survive the current constraint.
/// Esc and Ctrl+U clear a non-empty constraint; an empty one lets Esc fall
/// through to whatever hosts the input (typically dialog cancellation).
pub struct FilterInput {
    /// Cursor position as a byte index into the value
    cursor: usize,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self { cursor: 0 }
    }
}

impl FilterInput {
    /// Create a new FilterInput
    pub fn new() -> Self {
        Self::default()
    }

    fn prev_boundary(&self, value: &str) -> usize {
        let mut at = self.cursor.min(value.len());
        while at > 0 {
            at -= 1;
            if value.is_char_boundary(at) {
                break;
            }
        }
        at
    }

    fn next_boundary(&self, value: &str) -> usize {
        let mut at = self.cursor.min(value.len());
        while at < value.len() {
            at += 1;
            if value.is_char_boundary(at) {
                break;
            }
        }
        at
    }
}

impl<A> Component<A> for FilterInput {
    type Props<'a> = FilterInputProps<'a, A>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        self.cursor = self.cursor.min(props.value.len());

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') if !props.value.is_empty() => {
                    self.cursor = 0;
                    Some((props.on_clear)())
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut value = props.value.to_owned();
                value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                Some((props.on_change)(value))
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let mut value = props.value.to_owned();
                let at = self.prev_boundary(props.value);
                value.remove(at);
                self.cursor = at;
                Some((props.on_change)(value))
            }
            KeyCode::Delete if self.cursor < props.value.len() => {
                let mut value = props.value.to_owned();
                value.remove(self.cursor);
                Some((props.on_change)(value))
            }
            KeyCode::Left => {
                self.cursor = self.prev_boundary(props.value);
                None
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Esc if !props.value.is_empty() => {
                self.cursor = 0;
                Some((props.on_clear)())
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.cursor = self.cursor.min(props.value.len());

        let border = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let badge = format!(" {} / {} ", props.visible_count, props.total_count);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Line::from(badge).right_aligned());

        let body = if props.value.is_empty() {
            Paragraph::new(props.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.value)
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(body, inner);

        if props.is_focused {
            let column = props.value[..self.cursor].chars().count() as u16;
            frame.set_cursor_position((inner.x + column.min(inner.width), inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, ctrl_key, key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Clear,
    }

    fn props(value: &str, is_focused: bool) -> FilterInputProps<'_, TestAction> {
        FilterInputProps {
            value,
            placeholder: "Type to filter…",
            is_focused,
            visible_count: 2,
            total_count: 5,
            on_change: TestAction::Change,
            on_clear: || TestAction::Clear,
        }
    }

    #[test]
    fn test_typing_emits_change() {
        let mut input = FilterInput::new();
        let actions: Vec<_> = input
            .handle_key(&char_key('a'), props("", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("a".into())]);
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = FilterInput::new();
        input.cursor = 2;
        let actions: Vec<_> = input
            .handle_key(&char_key('x'), props("abcd", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("abxcd".into())]);
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut input = FilterInput::new();
        input.cursor = 3;
        let actions: Vec<_> = input
            .handle_key(&key(KeyCode::Backspace), props("abc", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("ab".into())]);
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut input = FilterInput::new();
        let actions: Vec<_> = input
            .handle_key(&key(KeyCode::Backspace), props("abc", true))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_esc_clears_non_empty_value() {
        let mut input = FilterInput::new();
        let actions: Vec<_> = input
            .handle_key(&key(KeyCode::Esc), props("abc", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Clear]);
    }

    #[test]
    fn test_esc_falls_through_when_empty() {
        let mut input = FilterInput::new();
        let actions: Vec<_> = input
            .handle_key(&key(KeyCode::Esc), props("", true))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = FilterInput::new();
        let actions: Vec<_> = input
            .handle_key(&ctrl_key('u'), props("abc", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Clear]);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = FilterInput::new();
        let actions: Vec<_> = input
            .handle_key(&char_key('a'), props("", false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_shows_badge_and_placeholder() {
        let mut input = FilterInput::new();
        let mut harness = RenderHarness::new(30, 3);
        let output = harness.render_to_string(|frame| {
            input.render(frame, frame.area(), props("", true));
        });
        assert!(output.contains("2 / 5"));
        assert!(output.contains("Type to filter"));
    }

    #[test]
    fn test_render_shows_value() {
        let mut input = FilterInput::new();
        let mut harness = RenderHarness::new(30, 3);
        let output = harness.render_to_string(|frame| {
            input.render(frame, frame.area(), props("gr", true));
        });
        assert!(output.contains("gr"));
    }
}
