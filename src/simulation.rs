//! Multi-day runs over a list of items.
//!
//! Each day's block is written out before that day's update runs, so only the
//! current item list is kept in memory however many days are simulated.

use std::fmt;
use std::io::{self, Write};

use crate::inventory::{Item, update};

/// Items as they stood at the start of one day, in the text fixture layout.
#[derive(Debug, Clone, Copy)]
pub struct DayReport<'a> {
	pub day: u32,
	pub items: &'a [Item],
}

impl fmt::Display for DayReport<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "-------- day {} --------", self.day)?;
		writeln!(f, "name, sellIn, quality")?;
		for item in self.items {
			writeln!(f, "{}", item)?;
		}
		writeln!(f)
	}
}

/// Run `days` daily updates over `items`, writing each morning's state to `out`.
///
/// Day 0 is the starting state. On return `items` holds the state after the
/// last update. A write error stops the run at that day.
pub fn simulate<W: Write>(items: &mut [Item], days: u32, out: &mut W) -> io::Result<()> {
	for day in 0..days {
		write!(out, "{}", DayReport { day, items })?;
		update(items);
		tracing::debug!(day, items = items.len(), "aged stock by one day");
	}

	out.flush()
}
