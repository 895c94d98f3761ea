//! Per-query results and their text rendering.

use std::fmt;

use grid_pathfinder::{GridPathFinder, Point, SearchStats};
use position_octree::PositionOctree;

use crate::scenario::Query;

/// Outcome of one query, path in start-to-goal order.
#[derive(Debug, Clone)]
pub struct QueryReport {
	pub index: usize,
	pub query: Query,
	/// Cells from start to goal, or `None` when no path was found.
	pub path: Option<Vec<Point>>,
	/// G of the goal cell.
	pub cost: Option<i32>,
	pub stats: Option<SearchStats>,
	/// Landmarks lying on the path at z = 0, in path order.
	pub landmarks: Vec<(Point, String)>,
}

impl QueryReport {
	/// Run `query` on `finder` and collect landmarks along the result.
	pub fn run(
		finder: &GridPathFinder,
		landmarks: &PositionOctree<String>,
		index: usize,
		query: Query,
	) -> Self {
		let nodes = finder.find_path(query.start, query.end);
		let stats = finder.last_stats();

		let cost = nodes.as_ref().and_then(|nodes| nodes.first()).map(|goal| goal.g);
		let path: Option<Vec<Point>> =
			nodes.map(|nodes| nodes.iter().rev().map(|node| node.point()).collect());

		let landmarks = path
			.iter()
			.flatten()
			.filter_map(|p| {
				landmarks
					.find(p.x as i64, p.y as i64, 0)
					.map(|name| (*p, name.clone()))
			})
			.collect();

		Self {
			index,
			query,
			path,
			cost,
			stats,
			landmarks,
		}
	}
}

impl fmt::Display for QueryReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Query { start, end } = self.query;
		writeln!(
			f,
			"query {}: ({}, {}) -> ({}, {})",
			self.index, start.x, start.y, end.x, end.y
		)?;

		match (&self.path, self.cost) {
			(Some(path), Some(cost)) => {
				write!(f, "  path:")?;
				for p in path {
					write!(f, " ({}, {})", p.x, p.y)?;
				}
				writeln!(f)?;
				writeln!(f, "  cost: {}, steps: {}", cost, path.len().saturating_sub(1))?;
			}
			_ => {
				let outcome = self.stats.map(|s| format!("{:?}", s.outcome));
				writeln!(f, "  no path ({})", outcome.as_deref().unwrap_or("not run"))?;
			}
		}

		if let Some(stats) = self.stats {
			writeln!(
				f,
				"  closed: {}, elapsed: {:?}",
				stats.closed_nodes, stats.elapsed
			)?;
		}

		for (p, name) in &self.landmarks {
			writeln!(f, "  landmark {:?} at ({}, {})", name, p.x, p.y)?;
		}

		Ok(())
	}
}
