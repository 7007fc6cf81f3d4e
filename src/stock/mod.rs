//! Stock files for gilded-rose.
//!
//! This module handles:
//! - TOML stock file parsing and validation
//! - Directory cascade discovery
//! - The starter template written by `--init`

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{NO_USER_STOCK_ENV, STOCK_FILE_NAME, discover_stock_file, user_stock_path};
pub use parser::{parse_stock_file, parse_stock_str};
pub use template::{generate_init_template, write_init_template};
pub use types::{DEFAULT_DAYS, LoadedStock, StockFile, StockItem, default_stock};
