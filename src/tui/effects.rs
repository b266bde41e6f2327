use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use crate::data_provider::MenuProvider;
use crate::dom::Document;
use crate::widget::MenuWidget;

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Initialize a widget for the current source; resolved by [`DataEffects`]
    LoadMenu {
        container_id: String,
        source: String,
    },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::LoadMenu { container_id, source } => f
                .debug_struct("LoadMenu")
                .field("container_id", container_id)
                .field("source", source)
                .finish(),
        }
    }
}

/// Effect handler for menu loading
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded action when complete.
pub struct DataEffects {
    provider: Arc<dyn MenuProvider>,
}

impl DataEffects {
    pub fn new(provider: Arc<dyn MenuProvider>) -> Self {
        Self { provider }
    }

    /// Bind a widget to a fresh document and load its menu
    pub fn load_menu(&self, container_id: String, source: String) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let surface = Document::with_container(&container_id);
            let result =
                MenuWidget::initialize(surface, provider.as_ref(), &container_id, &source).await;
            Action::MenuLoaded(result.map(Box::new).map_err(|e| e.describe()))
        }))
    }
}
