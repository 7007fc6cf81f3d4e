use std::path::PathBuf;

/// Library-level structured errors for gilded-rose.
///
/// Aging items never fails; these cover loading and validating stock files.
/// The CLI binary wraps them with `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum GildedRoseError {
	#[error("Failed to read stock file: {path}")]
	StockReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse stock file: {path}")]
	StockParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Stock item #{index} has an empty name")]
	EmptyItemName { index: usize },

	#[error("Quality of {name:?} must be between {min} and {max}, got {quality}")]
	QualityOutOfRange {
		name: String,
		quality: i32,
		min: i32,
		max: i32,
	},

	#[error("Legendary item {name:?} must have quality {expected}, got {quality}")]
	LegendaryQuality {
		name: String,
		quality: i32,
		expected: i32,
	},

	#[error("Stock file already exists: {path}")]
	StockFileExists { path: PathBuf },

	#[error("Failed to write stock file: {path}")]
	StockWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using GildedRoseError.
pub type Result<T> = std::result::Result<T, GildedRoseError>;
