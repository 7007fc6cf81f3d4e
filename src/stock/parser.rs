use crate::error::{GildedRoseError, Result};
use crate::stock::types::StockFile;
use std::path::Path;

/// Parse a stock file from the given path.
pub fn parse_stock_file(path: &Path) -> Result<StockFile> {
	let content =
		std::fs::read_to_string(path).map_err(|source| GildedRoseError::StockReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_stock_str(&content, path)
}

/// Parse a stock file from a string (useful for testing).
pub fn parse_stock_str(content: &str, path: &Path) -> Result<StockFile> {
	let stock: StockFile =
		toml::from_str(content).map_err(|source| GildedRoseError::StockParseError {
			path: path.to_path_buf(),
			source,
		})?;

	stock.validate()?;

	tracing::debug!(
		path = %path.display(),
		items = stock.items.len(),
		"parsed stock file"
	);

	Ok(stock)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_stock() {
		let path = PathBuf::from("test.toml");
		let stock = parse_stock_str("", &path).unwrap();

		assert!(stock.days.is_none());
		assert!(stock.items.is_empty());
	}

	#[test]
	fn test_parse_items_array_of_tables() {
		let content = r#"
days = 5

[[items]]
name = "Aged Brie"
sell_in = 2
quality = 0

[[items]]
name = "Sulfuras, Hand of Ragnaros"
sell_in = -1
quality = 80
"#;
		let path = PathBuf::from("test.toml");
		let stock = parse_stock_str(content, &path).unwrap();

		assert_eq!(stock.days, Some(5));
		assert_eq!(stock.items.len(), 2);
		assert_eq!(stock.items[0].name, "Aged Brie");
		assert_eq!(stock.items[0].sell_in, 2);
		assert_eq!(stock.items[1].sell_in, -1);
		assert_eq!(stock.items[1].quality, 80);
	}

	#[test]
	fn test_parse_items_inline_tables() {
		let content = r#"
items = [
    { name = "foo", sell_in = 10, quality = 10 },
    { name = "Conjured foo", sell_in = 0, quality = 10 },
]
"#;
		let path = PathBuf::from("test.toml");
		let stock = parse_stock_str(content, &path).unwrap();

		assert_eq!(stock.items.len(), 2);
	}

	#[test]
	fn test_parse_missing_field() {
		let content = r#"
[[items]]
name = "foo"
sell_in = 10
"#;
		let path = PathBuf::from("broken.toml");
		match parse_stock_str(content, &path).unwrap_err() {
			GildedRoseError::StockParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("broken.toml"));
			}
			_ => panic!("Expected StockParseError"),
		}
	}

	#[test]
	fn test_parse_rejects_invalid_quality() {
		let content = r#"
[[items]]
name = "Aged Brie"
sell_in = 1
quality = 60
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_stock_str(content, &path);

		assert!(matches!(
			result,
			Err(GildedRoseError::QualityOutOfRange { quality: 60, .. })
		));
	}

	#[test]
	fn test_parse_stock_file_missing() {
		let path = PathBuf::from("/nonexistent/dir/.gilded-rose.toml");
		assert!(matches!(
			parse_stock_file(&path),
			Err(GildedRoseError::StockReadError { .. })
		));
	}
}
