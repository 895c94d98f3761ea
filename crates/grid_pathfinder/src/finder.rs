//! GridPathFinder - A* over a power-of-two weight grid.
//!
//! Per-cell scratch records are allocated once and reused by every search.
//! Instead of clearing them, each search advances a pair of status
//! sentinels; a record only counts as open or closed when its status equals
//! the current search's sentinel. When the sentinels would overflow the
//! scratch buffer is cleared for real and they restart.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
#[cfg(feature = "tracing")]
use tracing::{debug, warn};
use web_time::Instant;

use crate::config::{PathFinderConfig, HEAVY_DIAGONAL_FACTOR};
use crate::debug::{emit, DebugEvent, DebugHandler, DebugKind};
use crate::error::{PathFinderError, PathFinderResult};
use crate::grid::{Point, WeightGrid};
use crate::heuristic::tie_break;
use crate::open_set::OpenSet;

/// Neighbour offsets: N, E, S, W, then NE, SE, SW, NW.
const DIRECTIONS: [(i32, i32); 8] = [
  (0, -1),
  (1, 0),
  (0, 1),
  (-1, 0),
  (1, -1),
  (1, 1),
  (-1, 1),
  (-1, -1),
];

/// First diagonal entry in [`DIRECTIONS`].
const FIRST_DIAGONAL: usize = 4;

/// One cell of a returned path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathNode {
  pub x: i32,
  pub y: i32,
  pub parent_x: i32,
  pub parent_y: i32,
  /// Total estimated cost (G + H) when the cell was last opened.
  pub f: i32,
  /// Cost from the start.
  pub g: i32,
}

impl PathNode {
  #[inline]
  pub fn point(&self) -> Point {
    Point::new(self.x, self.y)
  }

  #[inline]
  pub fn parent(&self) -> Point {
    Point::new(self.parent_x, self.parent_y)
  }
}

/// How the last search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
  /// Goal reached.
  Found,
  /// Open set ran dry without reaching the goal.
  Exhausted,
  /// More than `search_limit` cells were closed.
  SearchLimit,
  /// [`GridPathFinder::request_stop`] was honoured.
  Cancelled,
  /// Start or end lies outside the grid.
  OutOfBounds,
}

/// Summary of the most recent search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
  pub outcome: SearchOutcome,
  /// Cells moved to the closed set.
  pub closed_nodes: usize,
  /// Wall time spent inside `find_path`.
  pub elapsed: Duration,
}

/// Per-cell scratch record.
#[derive(Clone, Copy, Debug, Default)]
struct SearchNode {
  f: i32,
  g: i32,
  parent: Point,
  status: u32,
}

/// Everything a search mutates, guarded by one lock.
struct SearchState {
  nodes: Vec<SearchNode>,
  open: OpenSet,
  open_value: u32,
  close_value: u32,
  debug: Option<DebugHandler>,
}

/// Borrowed inputs of one search.
struct SearchRequest<'a> {
  grid: &'a WeightGrid,
  config: &'a PathFinderConfig,
  width_log2: u32,
  stop: &'a AtomicBool,
  start: Point,
  end: Point,
}

impl SearchRequest<'_> {
  #[inline]
  fn location(&self, p: Point) -> usize {
    ((p.y as usize) << self.width_log2) | p.x as usize
  }

  #[inline]
  fn point(&self, location: usize) -> Point {
    let x = location & (self.grid.width() - 1);
    let y = location >> self.width_log2;
    Point::new(x as i32, y as i32)
  }
}

impl SearchState {
  fn new(cell_count: usize) -> Self {
    Self {
      nodes: vec![SearchNode::default(); cell_count],
      open: OpenSet::new(),
      open_value: 1,
      close_value: 2,
      debug: None,
    }
  }

  /// Move to fresh sentinels, clearing the scratch buffer on wraparound.
  fn advance_sentinels(&mut self) {
    match self.close_value.checked_add(2) {
      Some(close_value) => {
        self.open_value = close_value - 1;
        self.close_value = close_value;
      }
      None => {
        #[cfg(feature = "tracing")]
        debug!("status sentinels wrapped, clearing scratch buffer");
        self.nodes.fill(SearchNode::default());
        self.open_value = 1;
        self.close_value = 2;
      }
    }
  }

  fn run(&mut self, req: &SearchRequest) -> (SearchOutcome, usize, Option<Vec<PathNode>>) {
    let config = req.config;
    let progress = config.debug_progress;
    let estimate = config.heuristic_estimate;
    let punish = config.punish_change_direction;
    let (start, end) = (req.start, req.end);

    self.advance_sentinels();
    self.open.clear();

    emit(&mut self.debug, progress, || {
      DebugEvent::marker(DebugKind::Start, start)
    });
    emit(&mut self.debug, progress, || DebugEvent::marker(DebugKind::End, end));

    let start_location = req.location(start);
    let end_location = req.location(end);
    self.nodes[start_location] = SearchNode {
      f: estimate,
      g: 0,
      parent: start,
      status: self.open_value,
    };
    self.open.push(start_location, estimate);

    let directions = &DIRECTIONS[..config.direction_count()];
    let mut closed = 0usize;
    let mut outcome = SearchOutcome::Exhausted;

    loop {
      if req.stop.load(Ordering::Relaxed) {
        outcome = SearchOutcome::Cancelled;
        break;
      }
      let Some(location) = self.open.pop() else {
        break;
      };

      // Stale entry for a cell that was already expanded.
      if self.nodes[location].status == self.close_value {
        continue;
      }

      let current = req.point(location);
      emit(&mut self.debug, progress, || {
        DebugEvent::marker(DebugKind::Current, current)
      });

      if location == end_location {
        self.nodes[location].status = self.close_value;
        outcome = SearchOutcome::Found;
        break;
      }

      if closed > config.search_limit {
        outcome = SearchOutcome::SearchLimit;
        break;
      }

      let current_g = self.nodes[location].g;
      let horizontal = if punish {
        current.x - self.nodes[location].parent.x
      } else {
        0
      };

      for (i, &(dx, dy)) in directions.iter().enumerate() {
        let next = Point::new(current.x + dx, current.y + dy);
        let weight = match req.grid.weight(next) {
          Some(0) | None => continue,
          Some(w) => w as i32,
        };

        let mut new_g = if config.heavy_diagonals && i >= FIRST_DIAGONAL {
          current_g + (weight as f64 * HEAVY_DIAGONAL_FACTOR) as i32
        } else {
          current_g + weight
        };

        if punish {
          let penalty = next.manhattan(end);
          if dx != 0 && horizontal == 0 {
            new_g = new_g.saturating_add(penalty);
          }
          if dy != 0 && horizontal != 0 {
            new_g = new_g.saturating_add(penalty);
          }
        }

        let next_location = req.location(next);
        let (open_value, close_value) = (self.open_value, self.close_value);
        let node = &mut self.nodes[next_location];
        let seen = node.status == open_value || node.status == close_value;
        if seen && node.g <= new_g {
          continue;
        }

        let mut h = config.formula.estimate(estimate, next, end);
        if config.tie_breaker {
          h = tie_break(h, current, start, end);
        }

        *node = SearchNode {
          f: new_g.saturating_add(h),
          g: new_g,
          parent: current,
          status: open_value,
        };
        let f = node.f;
        self.open.push(next_location, f);

        emit(&mut self.debug, progress, || DebugEvent {
          from: current,
          at: next,
          kind: DebugKind::Open,
          f,
          g: new_g,
        });
      }

      closed += 1;
      let node = &mut self.nodes[location];
      node.status = self.close_value;
      let (f, g) = (node.f, node.g);
      emit(&mut self.debug, progress, || DebugEvent {
        from: Point::default(),
        at: current,
        kind: DebugKind::Close,
        f,
        g,
      });
    }

    let path = (outcome == SearchOutcome::Found).then(|| self.trace_path(req));
    (outcome, closed, path)
  }

  /// Follow parents from the goal to the self-parented start.
  fn trace_path(&mut self, req: &SearchRequest) -> Vec<PathNode> {
    let report = req.config.debug_found_path;
    let mut path = Vec::new();
    let mut at = req.end;

    loop {
      let node = self.nodes[req.location(at)];
      let path_node = PathNode {
        x: at.x,
        y: at.y,
        parent_x: node.parent.x,
        parent_y: node.parent.y,
        f: node.f,
        g: node.g,
      };
      path.push(path_node);
      emit(&mut self.debug, report, || DebugEvent {
        from: node.parent,
        at,
        kind: DebugKind::Path,
        f: node.f,
        g: node.g,
      });

      if node.parent == at {
        break;
      }
      at = node.parent;
    }

    path
  }
}

/// Reusable A* searcher bound to one grid.
///
/// `find_path` takes `&self`; concurrent callers are serialised by an
/// internal lock held for the whole search, so one instance can be shared
/// across threads. Independent instances share nothing.
pub struct GridPathFinder {
  grid: WeightGrid,
  config: PathFinderConfig,
  width_log2: u32,
  search: Mutex<SearchState>,
  last_stats: Mutex<Option<SearchStats>>,
  stop_requested: AtomicBool,
  stopped: AtomicBool,
}

impl GridPathFinder {
  /// Bind a searcher to `grid` with the default configuration.
  pub fn new(grid: WeightGrid) -> PathFinderResult<Self> {
    Self::with_config(grid, PathFinderConfig::default())
  }

  /// Bind a searcher to `grid` with an explicit configuration.
  pub fn with_config(grid: WeightGrid, config: PathFinderConfig) -> PathFinderResult<Self> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
      return Err(PathFinderError::EmptyGrid);
    }
    if !width.is_power_of_two() || !height.is_power_of_two() {
      return Err(PathFinderError::NotPowerOfTwo { width, height });
    }

    #[cfg(feature = "tracing")]
    debug!(width, height, "pathfinder created");
    Ok(Self {
      width_log2: width.trailing_zeros(),
      search: Mutex::new(SearchState::new(width * height)),
      last_stats: Mutex::new(None),
      stop_requested: AtomicBool::new(false),
      stopped: AtomicBool::new(true),
      grid,
      config,
    })
  }

  #[inline]
  pub fn grid(&self) -> &WeightGrid {
    &self.grid
  }

  /// Mutable weights, for marking tiles between searches.
  #[inline]
  pub fn grid_mut(&mut self) -> &mut WeightGrid {
    &mut self.grid
  }

  #[inline]
  pub fn config(&self) -> &PathFinderConfig {
    &self.config
  }

  #[inline]
  pub fn config_mut(&mut self) -> &mut PathFinderConfig {
    &mut self.config
  }

  pub fn set_config(&mut self, config: PathFinderConfig) {
    self.config = config;
  }

  /// Install a callback for search events.
  pub fn set_debug_handler(&mut self, handler: impl FnMut(&DebugEvent) + Send + 'static) {
    self.search.get_mut().debug = Some(Box::new(handler));
  }

  pub fn clear_debug_handler(&mut self) {
    self.search.get_mut().debug = None;
  }

  /// Ask the running search to give up at its next iteration.
  ///
  /// Has no effect on searches started afterwards.
  pub fn request_stop(&self) {
    self.stop_requested.store(true, Ordering::Relaxed);
  }

  /// True whenever no search is in flight.
  pub fn is_stopped(&self) -> bool {
    self.stopped.load(Ordering::Acquire)
  }

  /// Statistics of the last finished search, if any.
  pub fn last_stats(&self) -> Option<SearchStats> {
    *self.last_stats.lock()
  }

  /// Search from `start` to `end`.
  ///
  /// Returns the path goal-first (the last node is `start`, self-parented),
  /// or `None` when no path was found. Use [`last_stats`](Self::last_stats)
  /// to tell exhaustion, the search limit and cancellation apart.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, name = "pathfinder::find_path", fields(start = ?start, end = ?end))
  )]
  pub fn find_path(&self, start: Point, end: Point) -> Option<Vec<PathNode>> {
    let mut state = self.search.lock();
    let timer = Instant::now();
    self.stop_requested.store(false, Ordering::Relaxed);
    self.stopped.store(false, Ordering::Release);

    let (outcome, closed_nodes, path) = if !self.grid.contains(start) || !self.grid.contains(end) {
      #[cfg(feature = "tracing")]
      warn!(
        ?start,
        ?end,
        width = self.grid.width(),
        height = self.grid.height(),
        "path request outside the grid"
      );
      (SearchOutcome::OutOfBounds, 0, None)
    } else {
      let request = SearchRequest {
        grid: &self.grid,
        config: &self.config,
        width_log2: self.width_log2,
        stop: &self.stop_requested,
        start,
        end,
      };
      state.run(&request)
    };

    let stats = SearchStats {
      outcome,
      closed_nodes,
      elapsed: timer.elapsed(),
    };
    #[cfg(feature = "tracing")]
    debug!(
      ?outcome,
      closed_nodes,
      path_len = path.as_ref().map_or(0, Vec::len),
      elapsed_us = stats.elapsed.as_micros() as u64,
      "search finished"
    );

    *self.last_stats.lock() = Some(stats);
    self.stopped.store(true, Ordering::Release);
    path
  }
}

#[cfg(test)]
#[path = "finder_test.rs"]
mod finder_test;
