use crate::config::{Config, ThemeConfig, DEFAULT_CONTAINER_ID, DEFAULT_SOURCE};
use crate::dom::{Document, NodeId};
use crate::widget::MenuWidget;

/// Where the widget is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

/// Which part of the screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Selector,
    Details,
}

impl Pane {
    pub fn toggle(self) -> Self {
        match self {
            Pane::Selector => Pane::Details,
            Pane::Details => Pane::Selector,
        }
    }
}

/// Application state for the terminal host
#[derive(Debug)]
pub struct AppState {
    pub phase: LoadPhase,
    pub widget: Option<MenuWidget<Document>>,
    pub focus: Pane,
    /// Highlighted row of the open dropdown popup; row 0 is the placeholder
    pub dropdown: Option<usize>,
    /// Index of the highlighted details node
    pub details_cursor: usize,
    pub source: String,
    pub container_id: String,
    pub theme: ThemeConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Uninitialized,
            widget: None,
            focus: Pane::Selector,
            dropdown: None,
            details_cursor: 0,
            source: DEFAULT_SOURCE.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            container_id: config.container_id.clone(),
            theme: config.theme.clone(),
            ..Default::default()
        }
    }

    /// Rendered details nodes, in display order
    pub fn details_nodes(&self) -> Vec<NodeId> {
        match &self.widget {
            Some(widget) => widget
                .surface()
                .children(widget.details_container())
                .to_vec(),
            None => Vec::new(),
        }
    }

    /// Number of rows in the dropdown, placeholder included
    pub fn dropdown_rows(&self) -> usize {
        self.widget
            .as_ref()
            .map(|w| w.menu().len() + 1)
            .unwrap_or(0)
    }

    /// Dropdown row of the current selection (0 when nothing is selected)
    pub fn selected_row(&self) -> usize {
        self.widget
            .as_ref()
            .and_then(|w| {
                let current = w.surface().select(w.selector())?;
                w.menu().position(&current.value)
            })
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    /// Select value for a dropdown row
    pub fn row_value(&self, row: usize) -> Option<String> {
        let widget = self.widget.as_ref()?;
        if row == 0 {
            return Some(String::new());
        }
        widget.menu().sections().get(row - 1).map(|s| s.id.clone())
    }
}
