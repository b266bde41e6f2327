use tracing::{debug, error};

use super::action::Action;
use super::effects::Effect;
use super::state::{AppState, LoadPhase, Pane};

/// Pure state reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect to run. Menu loading is handed back as [`Effect::LoadMenu`] so the
/// runtime can turn it into an async fetch.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::LoadMenu => start_load(state),
        Action::MenuLoaded(result) => (finish_load(state, result), Effect::None),
        Action::FocusNext | Action::FocusPrevious => (toggle_focus(state), Effect::None),
        Action::MoveUp => (move_by(state, -1), Effect::None),
        Action::MoveDown => (move_by(state, 1), Effect::None),
        Action::Activate => (activate(state), Effect::None),
        Action::Cancel => (cancel(state), Effect::None),
        Action::Quit => (state, Effect::None),
    }
}

fn start_load(mut state: AppState) -> (AppState, Effect) {
    if state.phase == LoadPhase::Loading {
        debug!("REDUCER: load already in flight, ignoring");
        return (state, Effect::None);
    }
    state.phase = LoadPhase::Loading;
    state.widget = None;
    state.focus = Pane::Selector;
    state.dropdown = None;
    state.details_cursor = 0;
    let effect = Effect::LoadMenu {
        container_id: state.container_id.clone(),
        source: state.source.clone(),
    };
    (state, effect)
}

fn finish_load(
    mut state: AppState,
    result: Result<Box<crate::widget::MenuWidget<crate::dom::Document>>, String>,
) -> AppState {
    match result {
        Ok(widget) => {
            debug!("REDUCER: menu ready with {} sections", widget.menu().len());
            state.widget = Some(*widget);
            state.phase = LoadPhase::Ready;
        }
        Err(message) => {
            error!("Failed to load menu: {}", message);
            state.widget = None;
            state.phase = LoadPhase::Failed(message);
        }
    }
    state
}

fn toggle_focus(mut state: AppState) -> AppState {
    if state.widget.is_some() && state.dropdown.is_none() {
        state.focus = state.focus.toggle();
    }
    state
}

fn move_by(mut state: AppState, delta: isize) -> AppState {
    if state.widget.is_none() {
        return state;
    }

    if let Some(row) = state.dropdown {
        state.dropdown = Some(step(row, delta, state.dropdown_rows()));
        return state;
    }

    match state.focus {
        Pane::Selector => {
            let current = state.selected_row();
            let next = step(current, delta, state.dropdown_rows());
            if next != current {
                commit_row(&mut state, next);
            }
        }
        Pane::Details => {
            let count = state.details_nodes().len();
            state.details_cursor = step(state.details_cursor, delta, count);
        }
    }
    state
}

fn activate(mut state: AppState) -> AppState {
    if state.widget.is_none() {
        return state;
    }

    if let Some(row) = state.dropdown.take() {
        commit_row(&mut state, row);
        return state;
    }

    match state.focus {
        Pane::Selector => {
            state.dropdown = Some(state.selected_row());
        }
        Pane::Details => {
            let nodes = state.details_nodes();
            if let (Some(&node), Some(widget)) = (nodes.get(state.details_cursor), state.widget.as_mut()) {
                if let Err(e) = widget.surface_mut().toggle_open(node) {
                    error!("Failed to toggle details: {}", e);
                }
            }
        }
    }
    state
}

fn cancel(mut state: AppState) -> AppState {
    if state.dropdown.take().is_none() {
        state.focus = Pane::Selector;
    }
    state
}

/// Select the section shown on dropdown row `row`, firing the widget's change handler
fn commit_row(state: &mut AppState, row: usize) {
    let Some(value) = state.row_value(row) else {
        return;
    };
    if let Some(widget) = state.widget.as_mut() {
        debug!("REDUCER: selecting '{}'", value);
        if let Err(e) = widget.select(&value) {
            error!("Failed to change selection: {}", e);
        }
    }
    state.details_cursor = 0;
}

/// Move `current` by `delta` within `0..len`, clamping at both ends
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
