//! Buffer helpers shared by the TUI render tests.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::widgets::RenderableWidget;
use crate::config::ThemeConfig;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height).map(|y| buffer_line(buf, y)).collect()
}

/// A single row of the buffer, untrimmed
pub fn buffer_line(buf: &Buffer, y: u16) -> String {
    let area = buf.area();
    (area.x..area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
}

/// Render a widget into a fresh buffer with the default theme
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf, &ThemeConfig::default());
    buf
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
