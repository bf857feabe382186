//! The inventory updater: owns the stock list and ages it day by day.

use crate::item::Item;

/// Ordered collection of stock items.
///
/// Items are never added, removed or rebuilt once the inventory exists;
/// `advance_one_day` only mutates them in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build from `(name, sell_in, quality)` triples, preserving order.
    pub fn from_triples<N, I>(triples: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, i32, i32)>,
    {
        triples
            .into_iter()
            .map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
            .collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Age every item by one day, in collection order.
    pub fn advance_one_day(&mut self) {
        let _span = tracing::debug_span!("advance_one_day", items = self.items.len()).entered();

        for item in &mut self.items {
            let before = (item.sell_in(), item.quality());
            item.advance_one_day();
            tracing::trace!(
                item = item.name(),
                category = %item.category(),
                sell_in_before = before.0,
                quality_before = before.1,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
        }
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
