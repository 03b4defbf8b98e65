//! Sensor/actuator callback interface, the Rust expression of the
//! original's function-pointer slots on the DFS/flood-fill drivers. The
//! explorer is generic over any implementor of these traits — a real
//! one drives physical hardware, a test double replays a known maze.

use crate::grid::{CardinalDirection, GapMask, Grid, NavigatorState};

/// `sense(grid, nav, facing) -> gap_bitmask_aligned_to_NORTH`: called while
/// the navigator stands on a cell, reports which of the four sides are
/// open. Implementors are responsible for rotating a facing-relative
/// sensor reading into the NORTH-aligned mask themselves (see
/// `grid::align_to_north`) — the core only ever deals in the aligned form.
pub trait Sensor {
    fn sense(&mut self, grid: &Grid, nav: &NavigatorState, facing: CardinalDirection) -> GapMask;
}

/// `move(nav, direction)`: moves the navigator one cell in the given
/// cardinal direction and sets its orientation to that direction. The
/// core never calls this with a direction that is not a known adjacency
/// of `nav.current` (see the backtrack invariant in the design notes), so
/// implementors may assume `grid.neighbour(nav.current, direction)` is
/// always the correct destination.
pub trait Actuator {
    fn move_navigator(&mut self, grid: &Grid, nav: &mut NavigatorState, direction: CardinalDirection);
}

/// The bookkeeping every real `Actuator` needs to perform once the
/// physical move completes: advance `nav.current` to the known adjacency
/// in `direction` and update `nav.orientation`. Exposed as a free function
/// rather than a default trait method so that implementors can interleave
/// it with hardware calls (e.g. update orientation before the move
/// completes, current only after).
pub fn apply_move(grid: &Grid, nav: &mut NavigatorState, direction: CardinalDirection) {
    if let Some(next) = grid.neighbour(nav.current, direction) {
        nav.current = next;
    }
    nav.orientation = direction;
}

/// A test double that replays sensor readings from a ground-truth grid
/// instead of real hardware, and records the sequence of moves issued.
/// Used by `mazebot-core`'s own DFS tests, and a natural template for a
/// similar fixture in `mazebot-firmware`'s tests.
#[cfg(test)]
pub(crate) struct ReplaySensor<'a> {
    pub truth: &'a Grid,
    pub moves: crate::alloc_shim::Vec<CardinalDirection>,
}

#[cfg(test)]
impl<'a> Sensor for ReplaySensor<'a> {
    fn sense(&mut self, _grid: &Grid, nav: &NavigatorState, _facing: CardinalDirection) -> GapMask {
        self.truth.cell(nav.current).gap_mask()
    }
}

#[cfg(test)]
impl<'a> Actuator for ReplaySensor<'a> {
    fn move_navigator(&mut self, grid: &Grid, nav: &mut NavigatorState, direction: CardinalDirection) {
        self.moves.push(direction);
        apply_move(grid, nav, direction);
    }
}
