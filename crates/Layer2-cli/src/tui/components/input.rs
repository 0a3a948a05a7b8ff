//! Input box component

use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Labelled single-line text input
pub struct InputBox {
    /// Current input text
    content: String,

    /// Cursor position (in chars, not bytes)
    cursor: usize,

    /// Whether the input is focused
    focused: bool,

    /// Border title
    label: String,

    /// Placeholder text
    placeholder: String,
}

impl InputBox {
    /// Create a new input box
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            label: label.into(),
            placeholder: String::new(),
        }
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Get current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content, cursor at the end
    #[cfg(test)]
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Set focus
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Check if focused
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Handle key event, returns true if Enter was pressed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => return true,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_index();
                self.content.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index();
                    self.content.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_index();
                    self.content.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor < self.char_len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.char_len();
            }
            _ => {}
        }
        false
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Render the input box
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.is_focused() {
            theme.border_focused()
        } else {
            theme.border()
        };

        let (display_text, text_style) = if self.content.is_empty() {
            (self.placeholder.clone(), theme.text_muted())
        } else {
            (self.content.clone(), theme.text())
        };

        let input = Paragraph::new(display_text).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", self.label)),
        );

        frame.render_widget(input, area);

        // Show cursor
        if self.focused {
            let x = area.x + (self.cursor as u16).min(area.width.saturating_sub(3)) + 1;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
