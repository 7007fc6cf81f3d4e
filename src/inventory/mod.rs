//! Daily aging of shop stock.
//!
//! This module handles:
//! - Resolving an item's update category from its name
//! - The per-category quality and sell-in rules
//! - Aging a whole list of items by one day

pub mod category;
pub mod item;
pub mod rules;

pub use category::Category;
pub use item::{GildedRose, Item};
pub use rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// Age every item by one day, in order, in place.
///
/// The category is resolved from the name on every call. Items never affect
/// each other and the update cannot fail.
pub fn update(items: &mut [Item]) {
	for item in items.iter_mut() {
		rules::apply(Category::resolve(&item.name), item);
	}
}
