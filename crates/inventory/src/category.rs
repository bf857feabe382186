use serde::{Deserialize, Serialize};

use crate::item::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Behavioural class of a stock item.
///
/// Resolved once from the item name when the item is constructed; the daily
/// update dispatches on this tag and never looks at the name again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Normal,
    /// Gains quality every day, twice as fast once expired.
    AgedBrie,
    /// Never sold, never changes.
    Legendary,
    /// Gains quality as the concert nears, worthless after it.
    BackstagePass,
    /// Currently ages exactly like `Normal`.
    Conjured,
}

impl Category {
    /// Map an item name to its category. Unknown names are `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::BackstagePass,
            CONJURED_MANA_CAKE => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    /// Inclusive quality bounds the daily update maintains for this category.
    pub fn quality_bounds(self) -> (i32, i32) {
        match self {
            Category::Legendary => (LEGENDARY_QUALITY, LEGENDARY_QUALITY),
            _ => (MIN_QUALITY, MAX_QUALITY),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Category::Normal => "normal",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_category() {
        assert_eq!(Category::from_name(AGED_BRIE), Category::AgedBrie);
        assert_eq!(Category::from_name(SULFURAS), Category::Legendary);
        assert_eq!(Category::from_name(BACKSTAGE_PASSES), Category::BackstagePass);
        assert_eq!(Category::from_name(CONJURED_MANA_CAKE), Category::Conjured);
    }

    #[test]
    fn unknown_or_malformed_names_are_normal() {
        assert_eq!(Category::from_name("+5 Dexterity Vest"), Category::Normal);
        assert_eq!(Category::from_name(""), Category::Normal);
        assert_eq!(Category::from_name("aged brie"), Category::Normal);
        assert_eq!(Category::from_name("Sulfuras"), Category::Normal);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::BackstagePass).unwrap();
        assert_eq!(json, "\"backstage_pass\"");
        assert_eq!(Category::BackstagePass.to_string(), "backstage_pass");
    }

    #[test]
    fn legendary_bounds_are_pinned() {
        assert_eq!(Category::Legendary.quality_bounds(), (80, 80));
        assert_eq!(Category::Conjured.quality_bounds(), (0, 50));
    }
}
