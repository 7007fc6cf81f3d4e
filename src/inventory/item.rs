use std::fmt;

use crate::inventory::update;

/// A stock item on the shop's shelves.
///
/// `name` decides how the item ages; only `sell_in` and `quality` change
/// from day to day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
	/// Item name. Never modified by an update.
	pub name: String,

	/// Days left to sell the item. Goes negative once the date has passed.
	pub sell_in: i32,

	/// How valuable the item is.
	pub quality: i32,
}

impl Item {
	pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
		Item {
			name: name.into(),
			sell_in,
			quality,
		}
	}
}

impl fmt::Display for Item {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
	}
}

/// The shop: owns its items and ages them one day at a time.
#[derive(Debug, Clone, Default)]
pub struct GildedRose {
	items: Vec<Item>,
}

impl GildedRose {
	pub fn new(items: Vec<Item>) -> Self {
		GildedRose { items }
	}

	/// Advance every item by one day.
	pub fn update_quality(&mut self) {
		update(&mut self.items);
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn into_items(self) -> Vec<Item> {
		self.items
	}
}
