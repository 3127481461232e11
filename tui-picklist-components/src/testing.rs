//! Test utilities for tui-picklist components
//!
//! Key-event constructors and a [`RenderHarness`] that draws components into
//! an in-memory terminal and returns the plain-text frame for assertions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Create a `KeyEvent` for a bare key code
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a `KeyEvent` for a character with no modifiers
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Create a `KeyEvent` for a character with Ctrl held
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Render components into a fixed-size test terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend terminals are infallible");
        Self { terminal }
    }

    /// Draw a frame and return its contents as plain text
    ///
    /// Styling is discarded; rows are joined with newlines.
    pub fn render_to_string(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        self.terminal
            .draw(|frame| draw(frame))
            .expect("drawing to a test backend cannot fail");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Collect a buffer's symbols into a newline-joined string, dropping styles
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
