//! Per-category aging rules.
//!
//! Every quality rule looks at `sell_in` as it was *before* today's
//! decrement, then `sell_in` goes down by one. Reversing that order moves the
//! sell-by boundary by a day.

use crate::inventory::category::Category;
use crate::inventory::item::Item;

/// Lowest quality a non-legendary item is clamped to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Age `item` by one day according to `category`.
///
/// `sell_in` saturates at `i32::MIN` instead of overflowing.
pub fn apply(category: Category, item: &mut Item) {
	if category == Category::Legendary {
		item.quality = LEGENDARY_QUALITY;
		return;
	}

	item.quality = next_quality(category, item.sell_in, item.quality);
	item.sell_in = item.sell_in.saturating_sub(1);
}

/// Quality after one day, given the pre-update `sell_in`.
pub fn next_quality(category: Category, sell_in: i32, quality: i32) -> i32 {
	match category {
		Category::AgedBrie => aged_brie_quality(quality),
		Category::Legendary => LEGENDARY_QUALITY,
		Category::BackstagePass => backstage_pass_quality(sell_in, quality),
		Category::Conjured => conjured_quality(sell_in, quality),
		Category::Common => common_quality(sell_in, quality),
	}
}

fn aged_brie_quality(quality: i32) -> i32 {
	if quality == MAX_QUALITY {
		quality
	} else {
		quality.saturating_add(1)
	}
}

fn backstage_pass_quality(sell_in: i32, quality: i32) -> i32 {
	if sell_in <= 0 {
		return MIN_QUALITY;
	}

	let increase = match sell_in {
		1..=6 => 3,
		7..=10 => 2,
		_ => 1,
	};

	quality.saturating_add(increase).min(MAX_QUALITY)
}

/// Conjured items degrade twice as fast as common ones. No floor is applied.
fn conjured_quality(sell_in: i32, quality: i32) -> i32 {
	let decrease = if sell_in <= 0 { 4 } else { 2 };
	quality.saturating_sub(decrease)
}

fn common_quality(sell_in: i32, quality: i32) -> i32 {
	if quality == MIN_QUALITY {
		return MIN_QUALITY;
	}

	let decrease = if sell_in > 0 { 1 } else { 2 };
	quality.saturating_sub(decrease).max(MIN_QUALITY)
}
