//! BFS distance field over the currently-known graph, rooted at the
//! navigator's end cell. Ported from `floodfill`/`map_maze` in the
//! original; reuses the A* planner's heap machinery since uniform edge
//! weights make Dijkstra and BFS equivalent here.

use crate::grid::{CardinalDirection, CellId, Grid, NavigatorState};
use crate::heap::{MinHeap, NOT_FOUND};

/// Compute `h` for every cell reachable from `nav.end`, equal to the BFS
/// distance to `end` over the currently-known adjacency. Terminates early
/// once the navigator's current cell is popped, since that is the only
/// value the greedy descent step needs.
pub fn flood_fill(grid: &mut Grid, nav: &NavigatorState) {
    grid.clear_heuristics();
    grid.cell_mut(nav.end).h = 0;

    let mut open = MinHeap::with_capacity(grid.len());
    open.insert(nav.end, 0);

    while let Some(u) = open.pop_min() {
        if u == nav.current {
            return;
        }
        let u_h = grid.cell(u).h;
        for dir in CardinalDirection::ALL {
            let Some(v) = grid.cell(u).adjacency(dir) else {
                continue;
            };
            let h_prime = u_h.saturating_add(1);
            if h_prime < grid.cell(v).h {
                grid.cell_mut(v).h = h_prime;
                grid.cell_mut(v).predecessor = Some(u);
                let idx = open.find_index_of_cell(v);
                if idx == NOT_FOUND {
                    open.insert(v, h_prime);
                } else {
                    open.update_priority(idx, h_prime);
                }
            }
        }
    }
}

/// Greedy descent: the neighbour of `nav.current` whose `h` is strictly
/// less than the current cell's own `h`, scanned in cardinal order. If no
/// such neighbour exists (a dead-end in the known graph), returns `None`
/// — the caller is expected to issue a 180-degree turn and retreat.
pub fn next_step(grid: &Grid, nav: &NavigatorState) -> Option<(CellId, CardinalDirection)> {
    let current_h = grid.cell(nav.current).h;
    for dir in CardinalDirection::ALL {
        if let Some(neighbour) = grid.cell(nav.current).adjacency(dir) {
            if grid.cell(neighbour).h < current_h {
                return Some((neighbour, dir));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;

    #[test]
    fn flood_fill_is_bfs_distance_to_end() {
        let mut grid = Grid::create(1, 5);
        grid.open_all_walls();
        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(4, 0)).unwrap();
        let nav = NavigatorState::new(start, end, CardinalDirection::East);
        flood_fill(&mut grid, &nav);
        for x in 0..5u16 {
            let id = grid.index_of(Coordinate::new(x, 0)).unwrap();
            assert_eq!(grid.cell(id).h, (4 - x) as u32);
        }
    }

    #[test]
    fn next_step_descends_gradient_and_dead_ends_return_none() {
        let mut grid = Grid::create(1, 3);
        grid.open_all_walls();
        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(2, 0)).unwrap();
        let mut nav = NavigatorState::new(start, end, CardinalDirection::East);
        flood_fill(&mut grid, &nav);
        let (next, dir) = next_step(&grid, &nav).unwrap();
        assert_eq!(dir, CardinalDirection::East);
        nav.current = next;

        // Now standing on the end cell: no neighbour has a strictly lower h.
        nav.current = end;
        assert_eq!(next_step(&grid, &nav), None);
    }
}
