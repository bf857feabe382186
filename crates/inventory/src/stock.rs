//! Stock lists on disk: JSON arrays of `{ name, sell_in, quality }` records.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::updater::Inventory;

/// Parse a JSON stock list into an inventory.
///
/// Starting qualities outside the category's bounds are accepted as-is (the
/// daily update only stops them moving further out) but are logged.
pub fn from_json(input: &str) -> DomainResult<Inventory> {
    let items: Vec<Item> =
        serde_json::from_str(input).map_err(|e| DomainError::parse(e.to_string()))?;

    if items.is_empty() {
        return Err(DomainError::validation("stock list cannot be empty"));
    }

    for item in &items {
        let (min, max) = item.category().quality_bounds();
        if !(min..=max).contains(&item.quality()) {
            tracing::warn!(
                item = item.name(),
                category = %item.category(),
                quality = item.quality(),
                min,
                max,
                "starting quality outside category bounds"
            );
        }
    }

    tracing::debug!(items = items.len(), "stock list loaded");
    Ok(Inventory::new(items))
}

/// Serialize the current state of an inventory as a pretty JSON stock list.
pub fn to_json(inventory: &Inventory) -> DomainResult<String> {
    serde_json::to_string_pretty(inventory.items()).map_err(|e| DomainError::encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, BACKSTAGE_PASSES};

    #[test]
    fn parses_records_in_order() {
        let inventory = from_json(
            r#"[
                { "name": "Backstage passes to a TAFKAL80ETC concert", "sell_in": 15, "quality": 20 },
                { "name": "Elixir of the Mongoose", "sell_in": 5, "quality": 7 }
            ]"#,
        )
        .unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.items()[0].name(), BACKSTAGE_PASSES);
        assert_eq!(inventory.items()[0].category(), Category::BackstagePass);
        assert_eq!(inventory.items()[1].category(), Category::Normal);
        assert_eq!(inventory.items()[1].sell_in(), 5);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = from_json("[{ \"name\": \"Aged Brie\" ").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));

        let err = from_json(r#"[{ "name": "Aged Brie", "sell_in": "soon", "quality": 1 }]"#)
            .unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = from_json("[]").unwrap_err();
        assert_eq!(err, DomainError::validation("stock list cannot be empty"));
    }

    #[test]
    fn out_of_bounds_quality_is_kept() {
        let inventory =
            from_json(r#"[{ "name": "Conjured Mana Cake", "sell_in": 3, "quality": 70 }]"#).unwrap();
        assert_eq!(inventory.items()[0].quality(), 70);
    }

    #[test]
    fn snapshot_reloads_to_the_same_inventory() {
        let mut inventory = Inventory::from_triples([("Aged Brie", 2, 0), ("Elixir", 5, 7)]);
        inventory.advance_days(3);

        let json = to_json(&inventory).unwrap();
        assert!(json.contains("\"sell_in\": -1"));
        assert_eq!(from_json(&json).unwrap(), inventory);
    }
}
