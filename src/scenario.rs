//! Scenario files: a glyph map, pathfinder settings, landmarks and queries.

use anyhow::{Context, Result};
use grid_pathfinder::{round_to_power_of_two, PathFinderConfig, Point, WeightGrid, BLOCKED_TILE};
use position_octree::PositionOctree;
use serde::Deserialize;
use std::path::Path;

/// On-disk layout of a scenario.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
	/// Map rows, top row is y = 0.
	map: Vec<String>,
	/// Search settings; omitted fields keep their defaults.
	#[serde(default)]
	pathfinder: PathFinderConfig,
	#[serde(default)]
	landmark: Vec<LandmarkEntry>,
	#[serde(default)]
	query: Vec<QueryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LandmarkEntry {
	name: String,
	position: [i64; 3],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QueryEntry {
	start: [i32; 2],
	end: [i32; 2],
}

/// A single path request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
	pub start: Point,
	pub end: Point,
}

/// Validated scenario, ready to run.
#[derive(Debug)]
pub struct Scenario {
	/// Weights padded to power-of-two dimensions.
	pub grid: WeightGrid,
	/// Width of the map as written (widest row).
	pub map_width: usize,
	/// Number of map rows as written.
	pub map_height: usize,
	pub config: PathFinderConfig,
	/// Named positions keyed by (x, y, z).
	pub landmarks: PositionOctree<String>,
	pub queries: Vec<Query>,
}

/// Cell weight for a map glyph.
pub fn glyph_weight(glyph: char) -> Option<u8> {
	match glyph {
		'#' => Some(BLOCKED_TILE),
		'.' => Some(1),
		'1'..='9' => glyph.to_digit(10).map(|d| d as u8),
		_ => None,
	}
}

impl Scenario {
	/// Load and validate a scenario from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
		Self::from_toml_str(&content)
			.with_context(|| format!("Invalid scenario: {}", path.display()))
	}

	/// Parse and validate scenario TOML.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let file: ScenarioFile =
			toml::from_str(content).with_context(|| "Failed to parse scenario TOML")?;

		if file.map.is_empty() {
			anyhow::bail!("Scenario must have at least one map row");
		}
		if file.query.is_empty() {
			anyhow::bail!("Scenario must have at least one query");
		}

		let map_height = file.map.len();
		let map_width = file.map.iter().map(|row| row.chars().count()).max().unwrap_or(0);
		if map_width == 0 {
			anyhow::bail!("Scenario map rows are all empty");
		}

		let grid = build_grid(&file.map, map_width)?;

		let contains = |p: Point| {
			p.x >= 0 && p.y >= 0 && (p.x as usize) < map_width && (p.y as usize) < map_height
		};
		let mut queries = Vec::with_capacity(file.query.len());
		for (index, entry) in file.query.iter().enumerate() {
			let query = Query {
				start: Point::new(entry.start[0], entry.start[1]),
				end: Point::new(entry.end[0], entry.end[1]),
			};
			for (label, p) in [("start", query.start), ("end", query.end)] {
				if !contains(p) {
					anyhow::bail!(
						"Query {} {} ({}, {}) lies outside the {}x{} map",
						index,
						label,
						p.x,
						p.y,
						map_width,
						map_height
					);
				}
			}
			queries.push(query);
		}

		let mut landmarks = PositionOctree::new();
		for entry in file.landmark {
			let [x, y, z] = entry.position;
			if let Some(previous) = landmarks.insert(entry.name.clone(), x, y, z) {
				log::warn!(
					"landmark {:?} replaces {:?} at ({}, {}, {})",
					entry.name,
					previous,
					x,
					y,
					z
				);
			}
		}

		log::info!(
			"scenario: {}x{} map ({}x{} grid), {} landmarks, {} queries",
			map_width,
			map_height,
			grid.width(),
			grid.height(),
			landmarks.len(),
			queries.len()
		);

		Ok(Self {
			grid,
			map_width,
			map_height,
			config: file.pathfinder,
			landmarks,
			queries,
		})
	}
}

/// Convert glyph rows into a weight grid padded to powers of two.
fn build_grid(rows: &[String], map_width: usize) -> Result<WeightGrid> {
	let width = round_to_power_of_two(map_width);
	let height = round_to_power_of_two(rows.len());
	// Short rows and the power-of-two margin stay blocked.
	let mut grid = WeightGrid::filled(width, height, BLOCKED_TILE);

	for (y, row) in rows.iter().enumerate() {
		for (x, glyph) in row.chars().enumerate() {
			let weight = glyph_weight(glyph).with_context(|| {
				format!("Unknown map glyph {:?} at ({}, {})", glyph, x, y)
			})?;
			grid.set_weight(Point::new(x as i32, y as i32), weight);
		}
	}

	Ok(grid)
}

#[cfg(test)]
#[path = "scenario_test.rs"]
mod scenario_test;
