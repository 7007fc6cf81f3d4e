use std::fmt;

/// Exact name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Exact name of the legendary item that never has to be sold.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Prefix shared by all concert backstage passes.
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";

/// Prefix shared by all conjured items.
pub const CONJURED_PREFIX: &str = "Conjured";

/// Update category an item belongs to, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	AgedBrie,
	Legendary,
	BackstagePass,
	Conjured,
	Common,
}

impl Category {
	/// Resolve the category for an item name.
	///
	/// Checks run in a fixed order and the first hit wins:
	/// 1. exact match on [`AGED_BRIE`]
	/// 2. exact match on [`SULFURAS`]
	/// 3. prefix match on [`BACKSTAGE_PASS_PREFIX`]
	/// 4. prefix match on [`CONJURED_PREFIX`]
	///
	/// Anything else is [`Category::Common`].
	pub fn resolve(name: &str) -> Self {
		if name == AGED_BRIE {
			return Category::AgedBrie;
		}
		if name == SULFURAS {
			return Category::Legendary;
		}
		if name.starts_with(BACKSTAGE_PASS_PREFIX) {
			return Category::BackstagePass;
		}
		if name.starts_with(CONJURED_PREFIX) {
			return Category::Conjured;
		}
		Category::Common
	}

	/// Short label used in CLI listings.
	pub fn label(self) -> &'static str {
		match self {
			Category::AgedBrie => "aged-brie",
			Category::Legendary => "legendary",
			Category::BackstagePass => "backstage-pass",
			Category::Conjured => "conjured",
			Category::Common => "common",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
