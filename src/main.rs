use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gilded_rose::simulation::simulate;
use gilded_rose::stock::{
	LoadedStock, default_stock, discover_stock_file, parse_stock_file, user_stock_path,
	write_init_template,
};

#[derive(Parser)]
#[command(name = "gilded-rose")]
#[command(
	author,
	version,
	about = "Simulate daily quality updates for the Gilded Rose inventory"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Number of days to simulate (overrides the stock file)
	#[arg(short, long, value_name = "DAYS")]
	days: Option<u32>,

	/// Stock file to use instead of searching for .gilded-rose.toml
	#[arg(long, value_name = "FILE", global = true)]
	stock: Option<PathBuf>,

	/// Create a template .gilded-rose.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .gilded-rose.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Enable debug logging
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Stock file commands
	Stock {
		#[command(subcommand)]
		action: StockAction,
	},
}

#[derive(Subcommand)]
enum StockAction {
	/// Display the resolved stock with each item's category
	Show,
	/// Check the stock file for errors without simulating anything
	Validate,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let default_directive = if verbose {
		"gilded_rose=debug"
	} else {
		"gilded_rose=warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	let _ = tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.without_time(),
		)
		.with(filter)
		.try_init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(command) = cli.command {
		return match command {
			Commands::Stock { action } => match action {
				StockAction::Show => handle_stock_show(cli.stock.as_deref()),
				StockAction::Validate => handle_stock_validate(cli.stock.as_deref()),
			},
		};
	}

	handle_simulate(cli.stock.as_deref(), cli.days)
}

/// Load the explicit stock file, or fall back to the discovery cascade.
fn locate_stock(explicit: Option<&Path>) -> Result<Option<LoadedStock>> {
	if let Some(path) = explicit {
		let stock = parse_stock_file(path)?;
		return Ok(Some(LoadedStock {
			stock,
			path: path.to_path_buf(),
		}));
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	Ok(discover_stock_file(&cwd)?)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let path = write_init_template(&cwd, force).context("Failed to create stock file")?;

	println!("Created {}", path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_simulate(explicit: Option<&Path>, days: Option<u32>) -> Result<ExitCode> {
	let loaded = locate_stock(explicit).context("Failed to load stock")?;

	let stock = match loaded {
		Some(loaded) => {
			tracing::info!(path = %loaded.path.display(), "using stock file");
			loaded.stock
		}
		None => {
			tracing::info!("no stock file found, using the default stock");
			default_stock()
		}
	};

	let days = days.unwrap_or_else(|| stock.days());
	let mut items = stock.to_items();
	let mut out = BufWriter::new(std::io::stdout().lock());

	match simulate(&mut items, days, &mut out) {
		Ok(()) => Ok(ExitCode::SUCCESS),
		// The reader went away (e.g. piped into `head`); nothing left to do.
		Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(ExitCode::SUCCESS),
		Err(e) => Err(e).context("Failed to write simulation report"),
	}
}

fn handle_stock_show(explicit: Option<&Path>) -> Result<ExitCode> {
	let loaded = locate_stock(explicit).context("Failed to load stock")?;

	let stock = match loaded {
		Some(loaded) => {
			println!("# Source: {}", loaded.path.display());
			loaded.stock
		}
		None => {
			println!("# Source: built-in default stock");
			default_stock()
		}
	};
	println!("# days: {}", stock.days());
	println!("# items: {}", stock.items.len());
	println!();

	for item in &stock.items {
		println!(
			"  {}, {}, {} [{}]",
			item.name,
			item.sell_in,
			item.quality,
			item.category()
		);
	}
	println!();

	if let Ok(user_path) = user_stock_path() {
		println!("User stock path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_stock_validate(explicit: Option<&Path>) -> Result<ExitCode> {
	match locate_stock(explicit) {
		Ok(Some(loaded)) => {
			println!(
				"Stock file is valid: {} ({} items)",
				loaded.path.display(),
				loaded.stock.items.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Ok(None) => {
			println!("No stock file found.");
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Stock file error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}
