// Module declarations
pub mod widgets;

pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::{AppState, LoadPhase, Pane};

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::MenuProvider;

/// Main entry point for TUI mode
pub async fn run(config: Config, provider: Arc<dyn MenuProvider>) -> Result<(), io::Error> {
    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &config, provider).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Leave raw mode and the alternate screen before a panic message is printed
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    provider: Arc<dyn MenuProvider>,
) -> Result<(), io::Error> {
    let data_effects = Arc::new(DataEffects::new(provider));
    let mut runtime = Runtime::new(AppState::new(config), data_effects);

    // Bind and load right away
    runtime.dispatch(Action::LoadMenu);

    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        // Process any actions from effects FIRST (so a finished load is drawn)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            renderer::render(runtime.state(), area, f.buffer_mut());
        })?;

        #[cfg(feature = "development")]
        if screenshot_requested {
            screenshot_requested = false;
            let filename = crate::dev::screenshot::screenshot_filename();
            if let Err(e) = crate::dev::screenshot::save_terminal_screenshot(terminal, &filename) {
                tracing::error!("Failed to save screenshot: {}", e);
            } else {
                tracing::info!("Screenshot saved to {}", filename);
            }
        }

        if actions_processed > 0 {
            continue;
        }

        // Give async work a chance to run before blocking on input
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                #[cfg(feature = "development")]
                {
                    use crossterm::event::{KeyCode, KeyModifiers};
                    if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                        tracing::info!("Screenshot requested via Shift-S");
                        screenshot_requested = true;
                        continue;
                    }
                }

                match key_to_action(key, runtime.state()) {
                    Some(Action::Quit) => {
                        tracing::debug!("ACTION: Quitting application");
                        break;
                    }
                    Some(action) => runtime.dispatch(action),
                    None => {}
                }
            }
        }
    }

    Ok(())
}
