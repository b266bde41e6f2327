/// DetailsListWidget - renders the details container as a list of twisties
///
/// Each dish is one summary line (name and price); open entries show their
/// description wrapped underneath.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::dom::{Document, NodeId};
use crate::surface::DETAILS_BODY_CLASS;

/// Indentation of description lines
const DESC_INDENT: u16 = 6;

/// Snapshot of one rendered details node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsEntry {
    pub name: String,
    pub price: String,
    pub desc: String,
    pub open: bool,
}

impl DetailsEntry {
    pub fn from_node(doc: &Document, details: NodeId) -> Self {
        let mut entry = DetailsEntry {
            name: String::new(),
            price: String::new(),
            desc: String::new(),
            open: doc.is_open(details),
        };
        for &part in doc.children(details) {
            if doc.tag(part) == Some("summary") {
                for &span in doc.children(part) {
                    if doc.has_class(span, "name") {
                        entry.name = doc.text_content(span);
                    } else if doc.has_class(span, "price") {
                        entry.price = doc.text_content(span);
                    }
                }
            } else if doc.has_class(part, DETAILS_BODY_CLASS) {
                entry.desc = doc.text_content(part);
            }
        }
        entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsListWidget {
    pub entries: Vec<DetailsEntry>,
    /// Highlighted entry, only set while the pane has focus
    pub cursor: Option<usize>,
}

impl DetailsListWidget {
    pub fn from_document(doc: &Document, container: NodeId, cursor: Option<usize>) -> Self {
        Self {
            entries: doc
                .children(container)
                .iter()
                .map(|&details| DetailsEntry::from_node(doc, details))
                .collect(),
            cursor,
        }
    }

    fn entry_height(&self, entry: &DetailsEntry, width: u16) -> usize {
        1 + if entry.open {
            wrap(&entry.desc, width.saturating_sub(DESC_INDENT) as usize).len()
        } else {
            0
        }
    }

    /// First entry to draw so that the cursor entry fits in `area`
    fn scroll_offset(&self, area: Rect) -> usize {
        let Some(cursor) = self.cursor else {
            return 0;
        };
        let cursor = cursor.min(self.entries.len().saturating_sub(1));
        let mut start = 0;
        while start < cursor {
            let used: usize = self.entries[start..=cursor]
                .iter()
                .map(|e| self.entry_height(e, area.width))
                .sum();
            if used <= area.height as usize {
                break;
            }
            start += 1;
        }
        start
    }
}

impl RenderableWidget for DetailsListWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let mut y = area.y;
        let start = self.scroll_offset(area);

        for (idx, entry) in self.entries.iter().enumerate().skip(start) {
            if y >= area.bottom() {
                break;
            }
            let highlighted = self.cursor == Some(idx);
            let marker = if highlighted { ">" } else { " " };
            let twisty = if entry.open { "▾" } else { "▸" };
            let name_style = if highlighted {
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let head = format!("{} {} ", marker, twisty);
            let (x, _) = buf.set_stringn(area.x, y, &head, area.width as usize, name_style);
            let (x, _) = buf.set_stringn(x, y, &entry.name, area.right().saturating_sub(x) as usize, name_style);
            let price_x = x + 2;
            if price_x < area.right() {
                buf.set_stringn(
                    price_x,
                    y,
                    &entry.price,
                    (area.right() - price_x) as usize,
                    Style::default().fg(theme.price_fg),
                );
            }
            y += 1;

            if entry.open {
                let width = area.width.saturating_sub(DESC_INDENT) as usize;
                for line in wrap(&entry.desc, width) {
                    if y >= area.bottom() {
                        break;
                    }
                    buf.set_string(area.x + DESC_INDENT, y, &line, Style::default());
                    y += 1;
                }
            }
        }
    }
}

/// Greedy word wrap on display width; words wider than `width` get their own line
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
