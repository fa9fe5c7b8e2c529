//! Day-by-day text report of the shop.

use std::fmt::Write as _;

use gildedrose_inventory::{GildedRose, Item};

/// Render one day's block: header, column line, one line per item, blank line.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-------- day {day} --------");
    let _ = writeln!(out, "name, sellIn, quality");
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    out.push('\n');
    out
}

/// Run the shop for `days` days, rendering the state before each advance and
/// after the last one (so `days + 1` blocks in total).
pub fn run(shop: &mut GildedRose, days: u32) -> String {
    let mut out = render_day(shop.day(), shop.items());
    for _ in 0..days {
        shop.update_quality();
        out.push_str(&render_day(shop.day(), shop.items()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::AGED_BRIE;

    #[test]
    fn renders_header_and_items() {
        let rendered = render_day(3, &[Item::new("generic", 1, 2)]);
        assert_eq!(
            rendered,
            "-------- day 3 --------\nname, sellIn, quality\ngeneric, 1, 2\n\n"
        );
    }

    #[test]
    fn run_renders_initial_state_plus_each_day() {
        let mut shop = GildedRose::new(vec![Item::new(AGED_BRIE, 2, 0)]);
        let rendered = run(&mut shop, 2);
        assert_eq!(rendered.matches("-------- day").count(), 3);
        assert!(rendered.contains("-------- day 0 --------\nname, sellIn, quality\nAged Brie, 2, 0\n"));
        assert!(rendered.contains("-------- day 2 --------\nname, sellIn, quality\nAged Brie, 0, 2\n"));
        assert_eq!(shop.day(), 2);
    }

    #[test]
    fn zero_days_renders_only_the_initial_state() {
        let mut shop = GildedRose::new(vec![Item::new("generic", 1, 1)]);
        let rendered = run(&mut shop, 0);
        assert_eq!(rendered.matches("-------- day").count(), 1);
        assert_eq!(shop.items()[0], Item::new("generic", 1, 1));
    }
}
