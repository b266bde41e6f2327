use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::commands::load_widget;
use crate::data_provider::MenuProvider;
use crate::menu::Menu;

pub fn format_sections(menu: &Menu) -> String {
    if menu.is_empty() {
        return "Menu has no sections.\n".to_string();
    }

    let id_width = menu
        .sections()
        .iter()
        .map(|s| s.id.width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for section in menu.sections() {
        let pad = id_width - section.id.width();
        output.push_str(&format!(
            "{}{}  {} ({} items)\n",
            section.id,
            " ".repeat(pad),
            section.label,
            section.items.len()
        ));
    }
    output
}

pub async fn run(provider: &dyn MenuProvider, container_id: &str, source: &str) -> Result<()> {
    let widget = load_widget(provider, container_id, source).await?;
    print!("{}", format_sections(widget.menu()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_format_sections_aligns_ids() {
        let output = format_sections(&fixtures::create_sample_menu());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "app       Appetizers (3 items)");
        assert_eq!(lines[3], "specials  Chef's Specials (0 items)");
    }

    #[test]
    fn test_format_sections_empty_menu() {
        assert_eq!(format_sections(&Menu::default()), "Menu has no sections.\n");
    }
}
