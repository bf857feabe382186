//! Stock inventory domain module.
//!
//! Ages a list of stock items by one simulated day at a time, applying the
//! quality rules of each item's category. Pure, deterministic domain logic:
//! no IO beyond optional JSON (de)serialization of stock lists.

pub mod category;
pub mod item;
pub mod stock;
pub mod updater;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, Category, SULFURAS};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use updater::Inventory;
