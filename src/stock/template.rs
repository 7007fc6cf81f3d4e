use std::path::{Path, PathBuf};

use crate::error::{GildedRoseError, Result};
use crate::stock::cascade::STOCK_FILE_NAME;
use crate::stock::types::{DEFAULT_DAYS, default_stock};

/// Generate the contents of a starter `.gilded-rose.toml`.
pub fn generate_init_template() -> String {
	let mut out = format!(
		"# gilded-rose stock file
#
# Quality must stay within 0..=50, except for
# \"Sulfuras, Hand of Ragnaros\" which is always 80.

days = {}
",
		DEFAULT_DAYS
	);

	for item in default_stock().items {
		out.push_str(&format!(
			"\n[[items]]\nname = {:?}\nsell_in = {}\nquality = {}\n",
			item.name, item.sell_in, item.quality
		));
	}

	out
}

/// Write the starter stock file into `dir`.
pub fn write_init_template(dir: &Path, force: bool) -> Result<PathBuf> {
	let path = dir.join(STOCK_FILE_NAME);

	if path.exists() && !force {
		return Err(GildedRoseError::StockFileExists { path });
	}

	std::fs::write(&path, generate_init_template()).map_err(|source| {
		GildedRoseError::StockWriteError {
			path: path.clone(),
			source,
		}
	})?;

	Ok(path)
}
