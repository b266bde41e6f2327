/// Screenshot utilities for capturing terminal output
///
/// Saves what the menu screen currently shows as a plain text file, one
/// line per terminal row with trailing blanks removed.
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use ratatui::{backend::Backend, buffer::Buffer, Terminal};

/// Default file name for a screenshot taken now
pub fn screenshot_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("menumaker-screenshot-{}.txt", timestamp)
}

/// Text of a buffer, one line per row
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

/// Save a buffer captured during a draw call
pub fn save_buffer_screenshot(buffer: &Buffer, path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(buffer_to_text(buffer).as_bytes())
}

/// Save the terminal's last drawn frame
///
/// Reads the current buffer instead of performing another draw.
pub fn save_terminal_screenshot<B: Backend>(
    terminal: &mut Terminal<B>,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let buffer = terminal.current_buffer_mut().clone();
    save_buffer_screenshot(&buffer, path)
}
