use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Lowest quality a non-legendary item can be aged down to.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a non-legendary item can be aged up to.
pub const MAX_QUALITY: i32 = 50;
/// Quality legendary items carry.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A single stock item.
///
/// `sell_in` is the number of days left before the sell-by date and may go
/// negative. `quality` is kept within `[MIN_QUALITY, MAX_QUALITY]` by every
/// step of the daily update (legendary items are never touched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Construct an item. The category is resolved from `name` here, once.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Whether the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Age the item by one day.
    ///
    /// Thresholds are compared against `sell_in` *after* it has been
    /// decremented, and each quality step checks the bound on its own.
    pub fn advance_one_day(&mut self) {
        match self.category {
            Category::Legendary => {}
            Category::AgedBrie => {
                self.tick();
                self.raise_quality();
                if self.is_expired() {
                    self.raise_quality();
                }
            }
            Category::BackstagePass => {
                self.tick();
                self.raise_quality();
                if self.sell_in < 10 {
                    self.raise_quality();
                }
                if self.sell_in < 5 {
                    self.raise_quality();
                }
                if self.is_expired() {
                    self.quality = MIN_QUALITY;
                }
            }
            // TODO: conjured stock is meant to degrade twice as fast; switch the
            // rate once the day-report fixtures are regenerated to expect it.
            Category::Normal | Category::Conjured => {
                self.tick();
                self.lower_quality();
                if self.is_expired() {
                    self.lower_quality();
                }
            }
        }
    }

    fn tick(&mut self) {
        self.sell_in = self.sell_in.saturating_sub(1);
    }

    fn raise_quality(&mut self) {
        if self.quality < MAX_QUALITY {
            self.quality += 1;
        }
    }

    fn lower_quality(&mut self) {
        if self.quality > MIN_QUALITY {
            self.quality -= 1;
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item: the category is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
