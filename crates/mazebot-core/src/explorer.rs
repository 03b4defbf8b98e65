//! Depth-first exploration driver, ported from `dfs_depth_first_search`/
//! `dfs_is_all_reachable_visited` in the original. Drives the navigator
//! to exhaustively visit every reachable cell via the `Sensor`/`Actuator`
//! callback pair, using an inner flood-fill as its termination check.

use crate::grid::{manhattan, CardinalDirection, Grid, NavigatorState};
use crate::heap::MinHeap;
use crate::sensor::{Actuator, Sensor};

/// Drive `nav` over `grid` until every reachable cell has been visited.
///
/// `grid` should start with every adjacency present ("assume open until
/// proven walled") — [`Grid::open_all_walls`] followed by this call is
/// the standard setup. `sense` is consulted once per stop and its result
/// is applied with `modify_walls(set=true, unset=false)`: walls can only
/// appear, never disappear, once exploration begins, matching the
/// "sensor mask inconsistency" policy in the error taxonomy.
pub fn explore<T: Sensor + Actuator>(grid: &mut Grid, nav: &mut NavigatorState, driver: &mut T) {
    grid.cell_mut(nav.start).visited = true;
    nav.current = nav.start;

    while !all_reachable_visited(grid, nav) {
        let mask = driver.sense(grid, nav, nav.orientation);
        grid.modify_walls(nav.current, mask, true, false);

        let mut stepped = false;
        for dir in CardinalDirection::ALL {
            let Some(neighbour) = grid.cell(nav.current).adjacency(dir) else {
                continue;
            };
            if grid.cell(neighbour).visited {
                continue;
            }
            let from = nav.current;
            driver.move_navigator(grid, nav, dir);
            if grid.cell(neighbour).predecessor.is_none() {
                grid.cell_mut(neighbour).predecessor = Some(from);
            }
            grid.cell_mut(neighbour).visited = true;
            stepped = true;
            break;
        }

        if !stepped {
            let current_coord = grid.cell(nav.current).coord;
            let predecessor = grid
                .cell(nav.current)
                .predecessor
                .expect("backtrack with no predecessor is an implementer error");
            let predecessor_coord = grid.cell(predecessor).coord;
            let dir = crate::grid::direction_from_to(current_coord, predecessor_coord)
                .expect("predecessor is always adjacent to current, see design notes");
            driver.move_navigator(grid, nav, dir);
        }
    }
}

/// An inner flood-fill from the navigator's current cell over the known
/// adjacency; true iff every cell the flood touches has `visited == true`.
/// Strictly stronger than "no unvisited neighbours reachable in one step"
/// and strictly weaker than "every cell in the grid visited" — this is
/// what lets the explorer terminate correctly on mazes with unreachable
/// regions.
pub fn all_reachable_visited(grid: &Grid, nav: &NavigatorState) -> bool {
    let mut seen = crate::alloc_shim::vec![false; grid.len()];
    let mut heap = MinHeap::with_capacity(grid.len());
    heap.insert(nav.current, 0);
    seen[nav.current] = true;

    let current_coord = grid.cell(nav.current).coord;
    let mut all_visited = true;

    while let Some(u) = heap.pop_min() {
        if !grid.cell(u).visited {
            all_visited = false;
        }
        for dir in CardinalDirection::ALL {
            if let Some(v) = grid.cell(u).adjacency(dir) {
                if !seen[v] {
                    seen[v] = true;
                    let priority = manhattan(current_coord, grid.cell(v).coord);
                    heap.insert(v, priority);
                }
            }
        }
    }
    all_visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CardinalDirection, Coordinate, GapMask};
    use crate::sensor::ReplaySensor;

    fn fixture_5x5() -> Grid {
        let masks = [
            0x2, 0xE, 0xA, 0xC, 0x4, 0x6, 0xB, 0xC, 0x3, 0x9, 0x3, 0x8, 0x7, 0x8, 0x4, 0x4, 0x4,
            0x7, 0xA, 0xD, 0x3, 0xB, 0x9, 0x2, 0x9,
        ];
        let mut grid = Grid::create(5, 5);
        for (id, &nibble) in masks.iter().enumerate() {
            grid.modify_walls(id, GapMask::from_nibble(nibble), true, true);
        }
        grid
    }

    #[test]
    fn dfs_visits_every_reachable_cell() {
        let truth = fixture_5x5();
        let mut grid = Grid::create(5, 5);
        grid.open_all_walls();

        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(4, 4)).unwrap();
        let mut nav = NavigatorState::new(start, end, CardinalDirection::North);

        let mut driver = ReplaySensor {
            truth: &truth,
            moves: crate::alloc_shim::Vec::new(),
        };
        explore(&mut grid, &mut nav, &mut driver);

        for id in 0..grid.len() {
            let coord = grid.cell(id).coord;
            let truth_id = truth.index_of(coord).unwrap();
            let truth_reachable = {
                let mut seen = crate::alloc_shim::vec![false; truth.len()];
                let mut stack = crate::alloc_shim::vec![start];
                seen[start] = true;
                let mut reachable = crate::alloc_shim::vec![false; truth.len()];
                reachable[start] = true;
                while let Some(u) = stack.pop() {
                    for dir in CardinalDirection::ALL {
                        if let Some(v) = truth.cell(u).adjacency(dir) {
                            if !seen[v] {
                                seen[v] = true;
                                reachable[v] = true;
                                stack.push(v);
                            }
                        }
                    }
                }
                reachable[truth_id]
            };
            if truth_reachable {
                assert!(grid.cell(id).visited, "cell {coord:?} should be visited");
            }
        }
    }
}
