/// StatusBar widget - displays the load status and keyboard hints at the bottom of the screen
///
/// Errors are shown in red in place of the status message.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;

/// A keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub status: String,
    pub error_message: Option<String>,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            error_message: None,
            hints: Vec::new(),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error_message = Some(error.into());
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    fn hints_text(&self) -> String {
        self.hints
            .iter()
            .map(|h| format!("{} {}", h.key, h.action))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let y = area.y + area.height - 1;

        // Hints take the right side; the message gets whatever is left
        let hints = self.hints_text();
        let hints_width = hints.width() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1).max(area.x);
        if !hints.is_empty() {
            buf.set_stringn(
                hints_x,
                y,
                &hints,
                (area.right() - hints_x) as usize,
                Style::default().add_modifier(Modifier::DIM),
            );
        }

        let (text, style) = match &self.error_message {
            Some(msg) => (format!("ERROR: {}", msg), Style::default().fg(Color::Red)),
            None => (self.status.clone(), Style::default()),
        };
        let room = if hints.is_empty() {
            area.width.saturating_sub(1)
        } else {
            hints_x.saturating_sub(area.x + 2)
        };
        buf.set_stringn(area.x + 1, y, &text, room as usize, style);
    }
}
