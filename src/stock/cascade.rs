use crate::error::{GildedRoseError, Result};
use crate::stock::parser::parse_stock_file;
use crate::stock::types::LoadedStock;
use std::path::{Path, PathBuf};

/// File name looked up in each directory of the cascade.
pub const STOCK_FILE_NAME: &str = ".gilded-rose.toml";

/// Environment variable that, if truthy, disables the `~/.gilded-rose.toml` fallback.
pub const NO_USER_STOCK_ENV: &str = "GILDED_ROSE_NO_USER_STOCK";

/// Find and load the stock file that applies to `start_dir`.
///
/// The lookup order is:
/// 1. `start_dir/.gilded-rose.toml`, then each parent directory in turn
/// 2. `~/.gilded-rose.toml`, unless [`NO_USER_STOCK_ENV`] is truthy
///
/// The first file found wins. Returns `Ok(None)` if there is none.
pub fn discover_stock_file(start_dir: &Path) -> Result<Option<LoadedStock>> {
	for dir in start_dir.ancestors() {
		let candidate = dir.join(STOCK_FILE_NAME);
		if candidate.exists() {
			tracing::debug!(path = %candidate.display(), "found stock file");
			return load(candidate).map(Some);
		}
	}

	if is_env_truthy(NO_USER_STOCK_ENV) {
		tracing::debug!("user stock lookup disabled by {}", NO_USER_STOCK_ENV);
		return Ok(None);
	}

	let user_path = user_stock_path()?;
	if user_path.exists() {
		tracing::debug!(path = %user_path.display(), "using user stock file");
		return load(user_path).map(Some);
	}

	Ok(None)
}

fn load(path: PathBuf) -> Result<LoadedStock> {
	let stock = parse_stock_file(&path)?;
	Ok(LoadedStock { stock, path })
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Get the path to the user's stock file.
pub fn user_stock_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(GildedRoseError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(STOCK_FILE_NAME))
}
