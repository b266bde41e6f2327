/// SelectorWidget - one-line rendering of the category select element
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::dom::{Document, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorWidget {
    pub label: String,
    pub current: String,
    pub focused: bool,
}

impl SelectorWidget {
    /// Build from the select element and the label that points at it
    pub fn from_document(doc: &Document, container: NodeId, select: NodeId, focused: bool) -> Self {
        let select_id = doc.element_id(select);
        let label = doc
            .children_by_tag(container, "label")
            .find(|&l| doc.attribute(l, "for") == select_id)
            .map(|l| doc.text_content(l))
            .unwrap_or_default();
        let current = doc
            .select(select)
            .and_then(|control| control.current_label())
            .unwrap_or_default()
            .to_string();
        Self {
            label,
            current,
            focused,
        }
    }

    /// Column where the control box starts
    pub fn control_x(&self) -> u16 {
        (self.label.width() + 1) as u16
    }
}

impl RenderableWidget for SelectorWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height == 0 {
            return;
        }
        buf.set_string(area.x, area.y, &self.label, Style::default());

        let control = format!("[ {} ▾ ]", self.current);
        let style = if self.focused {
            Style::default()
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let x = area.x + self.control_x();
        if x < area.right() {
            let max = (area.right() - x) as usize;
            buf.set_stringn(x, area.y, &control, max, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_line, render_widget};

    #[test]
    fn test_selector_renders_label_and_value() {
        let widget = SelectorWidget {
            label: "Select dish type:".into(),
            current: "Select one".into(),
            focused: false,
        };
        let buf = render_widget(&widget, 40, 1);
        assert_eq!(buffer_line(&buf, 0).trim_end(), "Select dish type: [ Select one ▾ ]");
    }

    #[test]
    fn test_selector_focused_uses_selection_color() {
        let widget = SelectorWidget {
            label: "Pick:".into(),
            current: "Desserts".into(),
            focused: true,
        };
        let buf = render_widget(&widget, 30, 1);
        let theme = ThemeConfig::default();
        assert_eq!(buf[(6, 0)].fg, theme.selection_fg);
        assert_eq!(buf[(0, 0)].fg, ratatui::style::Color::Reset);
    }

    #[test]
    fn test_selector_truncates_in_narrow_area() {
        let widget = SelectorWidget {
            label: "Pick:".into(),
            current: "A very long category name".into(),
            focused: false,
        };
        let buf = render_widget(&widget, 12, 1);
        assert_eq!(buffer_line(&buf, 0), "Pick: [ A ve");
    }
}
