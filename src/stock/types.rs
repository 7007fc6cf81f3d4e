use serde::Deserialize;
use std::path::PathBuf;

use crate::error::GildedRoseError;
use crate::inventory::{Category, Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// Days simulated when neither the stock file nor the CLI says otherwise.
pub const DEFAULT_DAYS: u32 = 2;

/// Top-level contents of a `.gilded-rose.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StockFile {
	/// Number of days to simulate.
	#[serde(default)]
	pub days: Option<u32>,

	/// Items on the shelves, in display order.
	#[serde(default)]
	pub items: Vec<StockItem>,
}

/// One item entry in a stock file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StockItem {
	pub name: String,
	pub sell_in: i32,
	pub quality: i32,
}

/// A stock file together with the path it was read from.
#[derive(Debug, Clone)]
pub struct LoadedStock {
	/// The parsed stock.
	pub stock: StockFile,

	/// Where it came from.
	pub path: PathBuf,
}

impl StockItem {
	pub fn category(&self) -> Category {
		Category::resolve(&self.name)
	}

	/// Check the quality bounds for this item's category.
	pub fn validate(&self, index: usize) -> Result<(), GildedRoseError> {
		if self.name.is_empty() {
			return Err(GildedRoseError::EmptyItemName { index });
		}

		if self.category() == Category::Legendary {
			if self.quality != LEGENDARY_QUALITY {
				return Err(GildedRoseError::LegendaryQuality {
					name: self.name.clone(),
					quality: self.quality,
					expected: LEGENDARY_QUALITY,
				});
			}
			return Ok(());
		}

		if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
			return Err(GildedRoseError::QualityOutOfRange {
				name: self.name.clone(),
				quality: self.quality,
				min: MIN_QUALITY,
				max: MAX_QUALITY,
			});
		}

		Ok(())
	}
}

impl From<&StockItem> for Item {
	fn from(entry: &StockItem) -> Self {
		Item::new(entry.name.clone(), entry.sell_in, entry.quality)
	}
}

impl StockFile {
	/// Validate all items in this stock file.
	pub fn validate(&self) -> Result<(), GildedRoseError> {
		for (index, item) in self.items.iter().enumerate() {
			item.validate(index)?;
		}
		Ok(())
	}

	/// Days to simulate, falling back to [`DEFAULT_DAYS`].
	pub fn days(&self) -> u32 {
		self.days.unwrap_or(DEFAULT_DAYS)
	}

	/// Build engine items from the stock entries.
	pub fn to_items(&self) -> Vec<Item> {
		self.items.iter().map(Item::from).collect()
	}
}

/// The classic shop inventory.
pub fn default_stock() -> StockFile {
	let entries = [
		("+5 Dexterity Vest", 10, 20),
		("Aged Brie", 2, 0),
		("Elixir of the Mongoose", 5, 7),
		("Sulfuras, Hand of Ragnaros", 0, 80),
		("Sulfuras, Hand of Ragnaros", -1, 80),
		("Backstage passes to a TAFKAL80ETC concert", 15, 20),
		("Backstage passes to a TAFKAL80ETC concert", 10, 49),
		("Backstage passes to a TAFKAL80ETC concert", 5, 49),
		("Conjured Mana Cake", 3, 6),
	];

	StockFile {
		days: None,
		items: entries
			.into_iter()
			.map(|(name, sell_in, quality)| StockItem {
				name: name.to_string(),
				sell_in,
				quality,
			})
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(name: &str, sell_in: i32, quality: i32) -> StockItem {
		StockItem {
			name: name.to_string(),
			sell_in,
			quality,
		}
	}

	#[test]
	fn test_default_stock_is_valid() {
		let stock = default_stock();
		assert_eq!(stock.items.len(), 9);
		assert!(stock.validate().is_ok());
		assert_eq!(stock.days(), DEFAULT_DAYS);
	}

	#[test]
	fn test_validate_rejects_quality_above_50() {
		let result = entry("foo", 3, 51).validate(0);
		match result.unwrap_err() {
			GildedRoseError::QualityOutOfRange { name, quality, .. } => {
				assert_eq!(name, "foo");
				assert_eq!(quality, 51);
			}
			_ => panic!("Expected QualityOutOfRange error"),
		}
	}

	#[test]
	fn test_validate_rejects_negative_quality() {
		assert!(entry("Conjured foo", 3, -1).validate(0).is_err());
	}

	#[test]
	fn test_validate_legendary_must_be_80() {
		assert!(entry("Sulfuras, Hand of Ragnaros", 0, 80).validate(0).is_ok());

		match entry("Sulfuras, Hand of Ragnaros", 0, 50)
			.validate(0)
			.unwrap_err()
		{
			GildedRoseError::LegendaryQuality {
				quality, expected, ..
			} => {
				assert_eq!(quality, 50);
				assert_eq!(expected, 80);
			}
			_ => panic!("Expected LegendaryQuality error"),
		}
	}

	#[test]
	fn test_validate_rejects_empty_name() {
		let stock = StockFile {
			days: None,
			items: vec![entry("foo", 1, 1), entry("", 1, 1)],
		};
		match stock.validate().unwrap_err() {
			GildedRoseError::EmptyItemName { index } => assert_eq!(index, 1),
			_ => panic!("Expected EmptyItemName error"),
		}
	}

	#[test]
	fn test_to_items_keeps_order() {
		let stock = StockFile {
			days: Some(5),
			items: vec![entry("b", 1, 2), entry("a", 3, 4)],
		};
		let items = stock.to_items();
		assert_eq!(items, vec![Item::new("b", 1, 2), Item::new("a", 3, 4)]);
		assert_eq!(stock.days(), 5);
	}
}
