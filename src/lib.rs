//! Gilded Rose - daily quality updates for a shop's stock.
//!
//! This library provides:
//! - Category resolution from item names
//! - The per-category aging rules and the one-day update over a list of items
//! - Stock file parsing, validation and cascade discovery
//! - Multi-day simulation with a plain-text report
//!
//! # Example
//!
//! ```
//! use gilded_rose::inventory::{GildedRose, Item};
//!
//! let mut shop = GildedRose::new(vec![
//!     Item::new("Aged Brie", 10, 10),
//!     Item::new("Conjured Mana Cake", 3, 6),
//! ]);
//! shop.update_quality();
//!
//! assert_eq!(shop.items()[0].to_string(), "Aged Brie, 9, 11");
//! assert_eq!(shop.items()[1].to_string(), "Conjured Mana Cake, 2, 4");
//! ```

pub mod error;
pub mod inventory;
pub mod simulation;
pub mod stock;

pub use error::{GildedRoseError, Result};
