//! Observational search events for visualisers.
//!
//! Handlers never influence the search. Costs that do not apply to an
//! event kind are reported as `-1`.

use crate::grid::Point;

/// What a [`DebugEvent`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DebugKind {
  /// Search start cell.
  Start,
  /// Search goal cell.
  End,
  /// Cell just popped from the open set.
  Current,
  /// Neighbour pushed with a new F/G.
  Open,
  /// Cell moved to the closed set.
  Close,
  /// Cell on the returned path, goal first.
  Path,
}

/// One step of a search, as reported to the debug handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugEvent {
  /// Parent or expanding cell; `(0, 0)` when not applicable.
  pub from: Point,
  /// Cell the event is about.
  pub at: Point,
  pub kind: DebugKind,
  pub f: i32,
  pub g: i32,
}

impl DebugEvent {
  /// Event with no parent and no costs.
  pub fn marker(kind: DebugKind, at: Point) -> Self {
    Self {
      from: Point::default(),
      at,
      kind,
      f: -1,
      g: -1,
    }
  }
}

/// Callback receiving search events.
pub type DebugHandler = Box<dyn FnMut(&DebugEvent) + Send>;

/// Deliver an event if a handler is installed and the event class is on.
#[inline]
pub(crate) fn emit(
  handler: &mut Option<DebugHandler>,
  enabled: bool,
  event: impl FnOnce() -> DebugEvent,
) {
  if !enabled {
    return;
  }
  if let Some(handler) = handler.as_mut() {
    handler(&event());
  }
}
