use super::*;
use grid_pathfinder::HeuristicFormula;

const DEMO: &str = r#"
map = [
  "......",
  ".##.9.",
  "...",
]

[pathfinder]
formula = "max_dxdy"
diagonals = false
heuristic_estimate = 1

[[landmark]]
name = "well"
position = [3, 0, 0]

[[landmark]]
name = "tower"
position = [-5, 2, 40]

[[query]]
start = [0, 0]
end = [5, 1]
"#;

// =========================================================================
// Parsing
// =========================================================================

/// Map is padded to powers of two with blocked cells.
#[test]
fn test_map_padding() {
	let scenario = Scenario::from_toml_str(DEMO).unwrap();

	assert_eq!((scenario.map_width, scenario.map_height), (6, 3));
	assert_eq!((scenario.grid.width(), scenario.grid.height()), (8, 4));

	let weight = |x, y| scenario.grid.weight(Point::new(x, y));
	assert_eq!(weight(0, 0), Some(1));
	assert_eq!(weight(1, 1), Some(0));
	assert_eq!(weight(4, 1), Some(9));
	// Short row, right margin and bottom margin.
	assert_eq!(weight(4, 2), Some(BLOCKED_TILE));
	assert_eq!(weight(7, 0), Some(BLOCKED_TILE));
	assert_eq!(weight(0, 3), Some(BLOCKED_TILE));
}

/// Pathfinder overrides apply; omitted fields keep defaults.
#[test]
fn test_pathfinder_section() {
	let scenario = Scenario::from_toml_str(DEMO).unwrap();

	assert_eq!(scenario.config.formula, HeuristicFormula::MaxDxDy);
	assert!(!scenario.config.diagonals);
	assert_eq!(scenario.config.heuristic_estimate, 1);
	assert_eq!(
		scenario.config.search_limit,
		PathFinderConfig::default().search_limit
	);
}

/// Landmarks land in the octree at their full 3D position.
#[test]
fn test_landmarks_indexed() {
	let scenario = Scenario::from_toml_str(DEMO).unwrap();

	assert_eq!(scenario.landmarks.len(), 2);
	assert_eq!(scenario.landmarks.find(3, 0, 0).map(String::as_str), Some("well"));
	assert_eq!(scenario.landmarks.find(-5, 2, 40).map(String::as_str), Some("tower"));
	assert_eq!(scenario.landmarks.find(-5, 2, 0), None);
}

/// Queries become points.
#[test]
fn test_queries() {
	let scenario = Scenario::from_toml_str(DEMO).unwrap();
	assert_eq!(
		scenario.queries,
		vec![Query {
			start: Point::new(0, 0),
			end: Point::new(5, 1),
		}]
	);
}

/// Glyph table.
#[test]
fn test_glyph_weight() {
	assert_eq!(glyph_weight('#'), Some(0));
	assert_eq!(glyph_weight('.'), Some(1));
	assert_eq!(glyph_weight('1'), Some(1));
	assert_eq!(glyph_weight('9'), Some(9));
	assert_eq!(glyph_weight('0'), None);
	assert_eq!(glyph_weight('x'), None);
}

// =========================================================================
// Validation
// =========================================================================

fn error_text(toml: &str) -> String {
	format!("{:#}", Scenario::from_toml_str(toml).unwrap_err())
}

/// Empty maps are rejected.
#[test]
fn test_rejects_empty_map() {
	let text = error_text("map = []\n[[query]]\nstart = [0, 0]\nend = [0, 0]\n");
	assert!(text.contains("at least one map row"), "{}", text);
}

/// Scenarios without queries are rejected.
#[test]
fn test_rejects_missing_queries() {
	let text = error_text("map = [\"..\"]\n");
	assert!(text.contains("at least one query"), "{}", text);
}

/// Unknown glyphs name the offending cell.
#[test]
fn test_rejects_unknown_glyph() {
	let text = error_text("map = [\"..\", \".x\"]\n[[query]]\nstart = [0, 0]\nend = [1, 0]\n");
	assert!(text.contains("Unknown map glyph 'x' at (1, 1)"), "{}", text);
}

/// Queries must lie inside the map as written, not just the padded grid.
#[test]
fn test_rejects_query_outside_map() {
	let text = error_text("map = [\"...\"]\n[[query]]\nstart = [0, 0]\nend = [3, 0]\n");
	assert!(text.contains("Query 0 end (3, 0) lies outside the 3x1 map"), "{}", text);
}

/// Malformed TOML and unknown keys surface as parse errors.
#[test]
fn test_rejects_bad_toml() {
	assert!(error_text("map = [").contains("Failed to parse scenario TOML"));
	assert!(error_text("map = [\".\"]\nbogus = 1\n").contains("Failed to parse scenario TOML"));
}
