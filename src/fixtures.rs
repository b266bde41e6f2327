/// Mock fixture data for testing and development
///
/// Deterministic menus shared by unit tests, the development mock provider
/// and the benchmarks.
use crate::menu::{Menu, MenuItem, MenuSection};

fn item(name: &str, desc: &str, price: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        desc: desc.to_string(),
        price: price.to_string(),
    }
}

fn section(id: &str, label: &str, items: Vec<MenuItem>) -> MenuSection {
    MenuSection {
        id: id.to_string(),
        label: label.to_string(),
        items,
    }
}

/// Small restaurant menu with one empty section
pub fn create_sample_menu() -> Menu {
    Menu::new(vec![
        section(
            "app",
            "Appetizers",
            vec![
                item("Spring Roll", "Crispy roll", "$5"),
                item("Pork Dumplings", "Six steamed dumplings with black vinegar", "$7"),
                item("Scallion Pancake", "Flaky, pan-fried, served with soy dip", "$6"),
            ],
        ),
        section(
            "mains",
            "Main Dishes",
            vec![
                item("Spicy Tofu (Veg.)", "Silken tofu in chili bean sauce", "$12"),
                item("General Tso's Chicken", "Sweet and spicy fried chicken", "$14"),
            ],
        ),
        section(
            "dessert",
            "Desserts",
            vec![item("Mango Pudding", "Chilled, with evaporated milk", "$4")],
        ),
        section("specials", "Chef's Specials", vec![]),
    ])
}

/// JSON form of [`create_sample_menu`]
pub const SAMPLE_MENU_JSON: &str = r#"[
  {
    "id": "app",
    "label": "Appetizers",
    "items": [
      { "name": "Spring Roll", "desc": "Crispy roll", "price": "$5" },
      { "name": "Pork Dumplings", "desc": "Six steamed dumplings with black vinegar", "price": "$7" },
      { "name": "Scallion Pancake", "desc": "Flaky, pan-fried, served with soy dip", "price": "$6" }
    ]
  },
  {
    "id": "mains",
    "label": "Main Dishes",
    "items": [
      { "name": "Spicy Tofu (Veg.)", "desc": "Silken tofu in chili bean sauce", "price": "$12" },
      { "name": "General Tso's Chicken", "desc": "Sweet and spicy fried chicken", "price": "$14" }
    ]
  },
  {
    "id": "dessert",
    "label": "Desserts",
    "items": [
      { "name": "Mango Pudding", "desc": "Chilled, with evaporated milk", "price": "$4" }
    ]
  },
  { "id": "specials", "label": "Chef's Specials", "items": [] }
]"#;

/// Menu with `sections` sections of `items_per_section` dishes each
pub fn create_large_menu(sections: usize, items_per_section: usize) -> Menu {
    Menu::new(
        (0..sections)
            .map(|s| {
                let items = (0..items_per_section)
                    .map(|i| {
                        item(
                            &format!("Dish {} of section #{}", i, s),
                            &format!("Description for dish {}", i),
                            &format!("${}.{:02}", 5 + i % 20, i % 100),
                        )
                    })
                    .collect();
                section(&format!("section-{}", s), &format!("Section {}", s), items)
            })
            .collect(),
    )
}
