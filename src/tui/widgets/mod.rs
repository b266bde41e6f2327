/// Widget-based rendering infrastructure for TUI
///
/// Widgets render themselves directly to a ratatui Buffer. Each one is built
/// from a snapshot of the menu document, so they can be tested in isolation
/// against a plain buffer.

pub mod details_list;
pub use details_list::{DetailsEntry, DetailsListWidget};

pub mod list_modal;
pub use list_modal::{render_list_modal, ListModalWidget};

pub mod selector;
pub use selector::SelectorWidget;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);
}
