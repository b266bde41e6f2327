pub mod sections;
pub mod show;

use anyhow::{Context, Result};

use crate::data_provider::MenuProvider;
use crate::dom::Document;
use crate::widget::MenuWidget;

/// Bind a widget to a fresh document holding only `container_id`
///
/// Used by the non-interactive commands, which render into a scratch
/// document and print the result.
pub async fn load_widget(
    provider: &dyn MenuProvider,
    container_id: &str,
    source: &str,
) -> Result<MenuWidget<Document>> {
    MenuWidget::initialize(Document::with_container(container_id), provider, container_id, source)
        .await
        .with_context(|| format!("Failed to load menu from {}", source))
}
