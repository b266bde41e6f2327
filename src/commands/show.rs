use anyhow::{bail, Result};

use crate::commands::load_widget;
use crate::data_provider::MenuProvider;
use crate::dom::{Document, NodeId};
use crate::surface::DETAILS_BODY_CLASS;

/// Text rendering of a details container: one summary line per dish with
/// its description indented below
pub fn format_details(doc: &Document, details_container: NodeId) -> String {
    let mut output = String::new();
    for &details in doc.children(details_container) {
        let mut summary_parts = Vec::new();
        let mut body = String::new();
        for &part in doc.children(details) {
            if doc.tag(part) == Some("summary") {
                summary_parts.extend(doc.children(part).iter().map(|&span| doc.text_content(span)));
            } else if doc.has_class(part, DETAILS_BODY_CLASS) {
                body = doc.text_content(part);
            }
        }
        output.push_str(&format!("▸ {}\n", summary_parts.join("  ")));
        if !body.is_empty() {
            output.push_str(&format!("    {}\n", body));
        }
    }
    output
}

pub async fn run(
    provider: &dyn MenuProvider,
    container_id: &str,
    source: &str,
    section: &str,
) -> Result<()> {
    let mut widget = load_widget(provider, container_id, source).await?;
    let Some(found) = widget.menu().find(section) else {
        bail!("No section '{}' in menu {}", section, source);
    };
    let label = found.label.clone();

    widget.select(section)?;
    let details = format_details(widget.surface(), widget.details_container());

    println!("{}", label);
    println!("{}", "═".repeat(label.chars().count().max(1)));
    if details.is_empty() {
        println!("No dishes in this category.");
    } else {
        print!("{}", details);
    }
    Ok(())
}
