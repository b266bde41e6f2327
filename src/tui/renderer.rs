use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};

use super::state::{AppState, LoadPhase, Pane};
use super::widgets::{
    DetailsListWidget, ListModalWidget, RenderableWidget, SelectorWidget, StatusBar,
};
use super::widgets::status_bar::KeyHint;

const NOTHING_SELECTED: &str = "Choose a category to see its dishes.";
const EMPTY_SECTION: &str = "No dishes in this category.";

/// Draw the whole screen for `state`
///
/// Layout, top to bottom: title, selector row, details list, status bar.
/// The dropdown popup is drawn last so it overlays the details list.
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let (title_area, selector_area, details_area, status_area) =
        (chunks[0], chunks[2], chunks[4], chunks[5]);

    render_title(state, title_area, buf);
    status_bar(state).render(status_area, buf, &state.theme);

    let Some(widget) = state.widget.as_ref() else {
        let (text, style) = match &state.phase {
            LoadPhase::Failed(_) => ("Could not load the menu.", Style::default().fg(Color::Red)),
            _ => ("Loading menu...", Style::default().add_modifier(Modifier::DIM)),
        };
        put_line(buf, selector_area, 0, text, style);
        return;
    };

    let doc = widget.surface();
    let selector = SelectorWidget::from_document(
        doc,
        widget.container(),
        widget.selector(),
        state.focus == Pane::Selector,
    );
    selector.render(selector_area, buf, &state.theme);

    let cursor = (state.focus == Pane::Details).then_some(state.details_cursor);
    let details = DetailsListWidget::from_document(doc, widget.details_container(), cursor);
    if details.entries.is_empty() {
        let text = if widget.selected().is_some() {
            EMPTY_SECTION
        } else {
            NOTHING_SELECTED
        };
        put_line(
            buf,
            details_area,
            2,
            text,
            Style::default().add_modifier(Modifier::DIM),
        );
    } else {
        details.render(details_area, buf, &state.theme);
    }

    if let Some(row) = state.dropdown {
        let options = doc
            .select(widget.selector())
            .map(|control| {
                control
                    .placeholder
                    .iter()
                    .cloned()
                    .chain(control.options.iter().map(|opt| opt.label.clone()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        ListModalWidget::new(
            options,
            row,
            selector.control_x(),
            selector_area.y.saturating_sub(area.y) + 1,
        )
        .render(area, buf, &state.theme);
    }
}

/// Write `text` on the first row of `area`, starting `indent` columns in
///
/// Skipped when the row is not inside the buffer.
fn put_line(buf: &mut Buffer, area: Rect, indent: u16, text: &str, style: Style) {
    let area = area.intersection(buf.area);
    if area.is_empty() || indent >= area.width {
        return;
    }
    buf.set_stringn(
        area.x + indent,
        area.y,
        text,
        (area.width - indent) as usize,
        style,
    );
}

fn render_title(state: &AppState, area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let (x, _) = buf.set_stringn(
        area.x,
        area.y,
        "Menu",
        area.width as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );
    let x = x + 2;
    if x < area.right() {
        buf.set_stringn(
            x,
            area.y,
            &state.source,
            (area.right() - x) as usize,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}

fn status_bar(state: &AppState) -> StatusBar {
    let bar = match &state.phase {
        LoadPhase::Uninitialized => StatusBar::new("Starting"),
        LoadPhase::Loading => StatusBar::new(format!("Loading {}", state.source)),
        LoadPhase::Ready => {
            let count = state.widget.as_ref().map(|w| w.menu().len()).unwrap_or(0);
            StatusBar::new(format!("{} categories", count))
        }
        LoadPhase::Failed(message) => StatusBar::new("Failed").with_error(message.clone()),
    };

    let mut hints = Vec::new();
    if state.widget.is_some() {
        if state.dropdown.is_some() {
            hints.push(KeyHint::new("Enter", "Choose"));
            hints.push(KeyHint::new("Esc", "Close"));
        } else {
            match state.focus {
                Pane::Selector => {
                    hints.push(KeyHint::new("Enter", "Open"));
                    hints.push(KeyHint::new("Tab", "Dishes"));
                }
                Pane::Details => {
                    hints.push(KeyHint::new("Enter", "Toggle"));
                    hints.push(KeyHint::new("Tab", "Categories"));
                }
            }
        }
    }
    hints.push(KeyHint::new("r", "Reload"));
    hints.push(KeyHint::new("q", "Quit"));
    bar.with_hints(hints)
}
