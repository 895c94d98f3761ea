//! Scenario runner for the grid pathfinder.
//!
//! Loads a TOML scenario (glyph map, search settings, landmarks, queries),
//! runs each query through one shared `GridPathFinder` and prints the path,
//! its cost, search statistics and any landmarks passed on the way.

mod report;
mod scenario;

use anyhow::{Context, Result};
use clap::Parser;
use grid_pathfinder::GridPathFinder;
use std::path::PathBuf;

use report::QueryReport;
use scenario::Scenario;

/// Grid path query runner.
#[derive(Parser, Debug)]
#[command(name = "protonav")]
#[command(about = "Runs path queries from a TOML scenario")]
struct Args {
	/// Path to scenario TOML file.
	#[arg(short, long)]
	scenario: PathBuf,

	/// Run only the query with this index.
	#[arg(short, long)]
	query: Option<usize>,

	/// Log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	let Scenario {
		grid,
		map_width,
		map_height,
		config,
		landmarks,
		queries,
	} = Scenario::load(&args.scenario)?;

	println!(
		"{}: {}x{} map, {} queries",
		args.scenario.display(),
		map_width,
		map_height,
		queries.len()
	);

	let finder = GridPathFinder::with_config(grid, config)
		.context("Scenario map is not a valid pathfinding grid")?;

	let selected: Vec<usize> = match args.query {
		Some(index) if index < queries.len() => vec![index],
		Some(index) => anyhow::bail!(
			"Query index {} out of range (scenario has {} queries)",
			index,
			queries.len()
		),
		None => (0..queries.len()).collect(),
	};

	let mut found = 0;
	for index in selected.iter().copied() {
		let report = QueryReport::run(&finder, &landmarks, index, queries[index]);
		if report.path.is_some() {
			found += 1;
		}
		print!("{report}");
	}

	log::info!("{} of {} queries found a path", found, selected.len());
	Ok(())
}

fn init_logging(verbose: u8) {
	let default_filter = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.init();
}
