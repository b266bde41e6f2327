/// ListModalWidget - renders the open dropdown as a popup list
///
/// Features:
/// - Positioned just below the select control, clamped to the screen
/// - Clear background behind the popup
/// - Selection indicator on the highlighted option
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;

/// Marker in front of the highlighted option
const SELECTOR: &str = "▶";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModalWidget {
    pub options: Vec<String>,
    pub selected_index: usize,
    pub position_x: u16,
    pub position_y: u16,
}

impl ListModalWidget {
    pub fn new(options: Vec<String>, selected_index: usize, position_x: u16, position_y: u16) -> Self {
        Self {
            options,
            selected_index,
            position_x,
            position_y,
        }
    }
}

impl RenderableWidget for ListModalWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        render_list_modal(
            &self.options,
            self.selected_index,
            self.position_x,
            self.position_y,
            area,
            buf,
            theme,
        );
    }
}

/// Renders a list selection popup at the specified position
///
/// Returns the popup area that was rendered
pub fn render_list_modal(
    options: &[String],
    selected_index: usize,
    position_x: u16,
    position_y: u16,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) -> Rect {
    let modal_height = u16::try_from(options.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2); // +2 for borders
    let max_option_len = options.iter().map(|s| s.width()).max().unwrap_or(20);
    let modal_width = u16::try_from(max_option_len)
        .unwrap_or(u16::MAX)
        .saturating_add(6);

    let modal_area = Rect {
        x: area.x + position_x.min(area.width.saturating_sub(modal_width)),
        y: area.y + position_y.min(area.height.saturating_sub(modal_height)),
        width: modal_width.min(area.width),
        height: modal_height.min(area.height),
    }
    .intersection(buf.area);
    if modal_area.is_empty() {
        return modal_area;
    }

    Clear.render(modal_area, buf);
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_fg))
        .render(modal_area, buf);

    let inner = Rect {
        x: modal_area.x + 1,
        y: modal_area.y + 1,
        width: modal_area.width.saturating_sub(2),
        height: modal_area.height.saturating_sub(2),
    };

    // Keep the highlighted option visible when the popup is taller than the screen
    let visible = inner.height as usize;
    let first = if visible == 0 { 0 } else { selected_index.saturating_sub(visible - 1) };

    for (row, (idx, option)) in options.iter().enumerate().skip(first).enumerate() {
        if row >= visible {
            break;
        }
        let y = inner.y + row as u16;
        let prefix = if idx == selected_index {
            format!(" {} ", SELECTOR)
        } else {
            "   ".to_string()
        };
        let style = if idx == selected_index {
            Style::default().fg(theme.selection_fg)
        } else {
            Style::default()
        };
        buf.set_stringn(inner.x, y, &prefix, inner.width as usize, style);
        buf.set_stringn(
            inner.x + 3,
            y,
            option,
            inner.width.saturating_sub(3) as usize,
            style,
        );
    }

    modal_area
}
