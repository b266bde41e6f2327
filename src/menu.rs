/// Menu data model loaded from a JSON resource
///
/// A menu is an ordered array of sections, each holding an ordered list of
/// dishes. The model is read-only once loaded.
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::warn;

/// Runs of characters outside the ASCII word class (`[A-Za-z0-9_]`)
static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").expect("static pattern is valid")
});

/// A single dish entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub desc: String,
    pub price: String,
}

impl MenuItem {
    /// Identifier used for the rendered details node
    pub fn dom_id(&self) -> String {
        dom_safe_id(&self.name)
    }
}

/// A named category of dishes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuSection {
    pub id: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

/// Ordered sequence of sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    sections: Vec<MenuSection>,
}

impl Menu {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        let menu = Self { sections };
        menu.warn_duplicate_ids();
        menu
    }

    /// Parse a menu from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let menu: Menu = serde_json::from_str(json)?;
        menu.warn_duplicate_ids();
        Ok(menu)
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find the section with the given id (first match)
    pub fn find(&self, id: &str) -> Option<&MenuSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Position of the section with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    fn warn_duplicate_ids(&self) {
        for (idx, section) in self.sections.iter().enumerate() {
            if self.sections[..idx].iter().any(|s| s.id == section.id) {
                warn!(
                    "Duplicate menu section id '{}' at index {}, only the first is reachable",
                    section.id, idx
                );
            }
        }
    }
}

/// Derive a DOM-safe identifier from a dish name
///
/// Every maximal run of non-word characters becomes a single `_`, then the
/// result is lower-cased: `"Spicy Tofu (Veg.)"` becomes `"spicy_tofu_veg_"`.
pub fn dom_safe_id(name: &str) -> String {
    NON_WORD_RUN.replace_all(name, "_").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_safe_id_collapses_runs() {
        assert_eq!(dom_safe_id("Spicy Tofu (Veg.)"), "spicy_tofu_veg_");
    }

    #[test]
    fn test_dom_safe_id_plain_name() {
        assert_eq!(dom_safe_id("Dumplings"), "dumplings");
        assert_eq!(dom_safe_id("Spring Roll"), "spring_roll");
    }

    #[test]
    fn test_dom_safe_id_keeps_underscores_and_digits() {
        assert_eq!(dom_safe_id("Combo_2 Deluxe"), "combo_2_deluxe");
    }

    #[test]
    fn test_dom_safe_id_leading_punctuation() {
        assert_eq!(dom_safe_id("  #1 Pho!!"), "_1_pho_");
    }

    #[test]
    fn test_dom_safe_id_non_ascii_is_non_word() {
        assert_eq!(dom_safe_id("Crème Brûlée"), "cr_me_br_l_e");
    }

    #[test]
    fn test_dom_safe_id_empty() {
        assert_eq!(dom_safe_id(""), "");
    }

    #[test]
    fn test_from_json_parses_sections_in_order() {
        let json = r#"[
            {"id": "app", "label": "Appetizers", "items": [
                {"name": "Spring Roll", "desc": "Crispy roll", "price": "$5"}
            ]},
            {"id": "empty", "label": "Empty", "items": []}
        ]"#;
        let menu = Menu::from_json(json).unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.sections()[0].id, "app");
        assert_eq!(menu.sections()[1].label, "Empty");
        assert_eq!(menu.sections()[0].items[0].price, "$5");
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let json = r#"[{"id": "a", "label": "A", "spicy": true, "items": []}]"#;
        let menu = Menu::from_json(json).unwrap();
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_from_json_missing_item_name_is_error() {
        let json = r#"[{"id": "a", "label": "A", "items": [{"desc": "x", "price": "$1"}]}]"#;
        assert!(Menu::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Menu::from_json(r#"{"id": "a"}"#).is_err());
    }

    #[test]
    fn test_find_returns_first_match() {
        let menu = Menu::new(vec![
            MenuSection { id: "x".into(), label: "First".into(), items: vec![] },
            MenuSection { id: "x".into(), label: "Second".into(), items: vec![] },
        ]);
        assert_eq!(menu.find("x").unwrap().label, "First");
        assert_eq!(menu.position("x"), Some(0));
        assert!(menu.find("missing").is_none());
        assert!(menu.find("").is_none());
    }

    #[test]
    fn test_item_dom_id() {
        let item = MenuItem {
            name: "General Tso's Chicken".into(),
            desc: String::new(),
            price: "$12".into(),
        };
        assert_eq!(item.dom_id(), "general_tso_s_chicken");
    }
}
