//! Where the starting inventory comes from.

use std::path::Path;

use anyhow::Context;

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, Item, SULFURAS};

/// The classic nine-item shop.
pub fn sample_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

/// Parse a JSON array of `{"name", "sell_in", "quality"}` objects.
pub fn parse_inventory(json: &str) -> anyhow::Result<Vec<Item>> {
    serde_json::from_str(json).context("inventory must be a JSON array of items")
}

pub fn load_inventory(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    parse_inventory(&raw).with_context(|| format!("invalid inventory file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_the_classic_items() {
        let items = sample_inventory();
        assert_eq!(items.len(), 9);
        assert_eq!(items[3], Item::new(SULFURAS, 0, 80));
        assert_eq!(items[8].name(), CONJURED);
    }

    #[test]
    fn parses_json_array() {
        let items = parse_inventory(
            r#"[
                {"name": "Aged Brie", "sell_in": 2, "quality": 0},
                {"name": "mystery box", "sell_in": -3, "quality": 12}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            items,
            vec![Item::new(AGED_BRIE, 2, 0), Item::new("mystery box", -3, 12)]
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_inventory(r#"{"name": "Aged Brie"}"#).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_inventory(Path::new("/nonexistent/shop.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shop.json"));
    }
}
