/// Mock menu provider for development and testing
use crate::data_provider::MenuProvider;
use crate::error::{MenuError, MenuResult};
use crate::menu::Menu;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

use crate::fixtures;

/// Provider that returns fixture data instead of fetching anything
pub struct MockProvider {
    menu: Option<Menu>,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Serve the sample fixture menu
    pub fn new() -> Self {
        info!("Creating MockProvider for development mode");
        Self::with_menu(fixtures::create_sample_menu())
    }

    pub fn with_menu(menu: Menu) -> Self {
        Self {
            menu: Some(menu),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider whose every fetch fails with a not-found I/O error
    pub fn failing() -> Self {
        Self {
            menu: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuProvider for MockProvider {
    async fn fetch_menu(&self, location: &str) -> MenuResult<Menu> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!("MockProvider: Returning mock menu for {}", location);
        self.menu.clone().ok_or_else(|| MenuError::Io {
            location: location.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock menu unavailable"),
        })
    }
}
