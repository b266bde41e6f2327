use crate::dom::Document;
use crate::widget::MenuWidget;

/// Global actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async menu loading)
#[derive(Debug)]
pub enum Action {
    /// Bind a fresh document and load the menu into it
    LoadMenu,
    MenuLoaded(Result<Box<MenuWidget<Document>>, String>),

    // Focus
    FocusNext,
    FocusPrevious,

    // Navigation inside the focused pane or the open popup
    MoveUp,
    MoveDown,

    /// Enter/Space: open the popup, commit its highlight, or toggle a details node
    Activate,
    /// Esc: close the popup or return to the selector
    Cancel,

    Quit,
}
