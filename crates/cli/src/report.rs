//! Plain-text day reports and the built-in starter stock.

use std::fmt::Write as _;

use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, Inventory, LEGENDARY_QUALITY, SULFURAS,
};

/// Stock used when no stock file is given.
pub fn starter_stock() -> Inventory {
    Inventory::from_triples([
        ("+5 Dexterity Vest", 10, 20),
        (AGED_BRIE, 2, 0),
        ("Elixir of the Mongoose", 5, 7),
        (SULFURAS, 0, LEGENDARY_QUALITY),
        (SULFURAS, -1, LEGENDARY_QUALITY),
        (BACKSTAGE_PASSES, 15, 20),
        (BACKSTAGE_PASSES, 10, 49),
        (BACKSTAGE_PASSES, 5, 49),
        (CONJURED_MANA_CAKE, 3, 6),
    ])
}

/// Render one day's block: header, column line, one line per item.
pub fn render_day(day: u32, inventory: &Inventory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-------- day {day} --------");
    let _ = writeln!(out, "name, sellIn, quality");
    for item in inventory.items() {
        let _ = writeln!(out, "{item}");
    }
    out
}

/// Render days `0..=days`, aging the inventory between blocks.
pub fn render_run(inventory: &mut Inventory, days: u32) -> String {
    let mut out = String::new();
    for day in 0..=days {
        if day > 0 {
            inventory.advance_one_day();
        }
        out.push_str(&render_day(day, inventory));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_stock_has_every_category() {
        let stock = starter_stock();
        assert_eq!(stock.len(), 9);
        assert_eq!(stock.items()[3].quality(), 80);
        assert_eq!(stock.items()[8].name(), CONJURED_MANA_CAKE);
    }

    #[test]
    fn day_zero_lists_stock_as_given() {
        let report = render_day(0, &Inventory::from_triples([(AGED_BRIE, 2, 0)]));
        assert_eq!(report, "-------- day 0 --------\nname, sellIn, quality\nAged Brie, 2, 0\n");
    }

    #[test]
    fn run_ages_between_blocks() {
        let mut stock = starter_stock();
        let report = render_run(&mut stock, 2);

        assert!(report.contains("-------- day 2 --------"));
        assert!(!report.contains("-------- day 3 --------"));
        assert!(report.contains("+5 Dexterity Vest, 9, 19"));
        assert!(report.contains("Backstage passes to a TAFKAL80ETC concert, 3, 50"));
        assert!(report.contains("Sulfuras, Hand of Ragnaros, -1, 80"));
        assert!(report.contains("Conjured Mana Cake, 1, 4"));
        assert_eq!(stock.items()[0].sell_in(), 8);
    }
}
