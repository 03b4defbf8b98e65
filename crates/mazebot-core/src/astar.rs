//! A* shortest-path planner, ported from `a_star`/`a_star_inner_loop`/
//! `a_star_get_path`/`a_star_get_path_str` in the original. Edge weights
//! are uniform (the graph is unweighted); A* is used for its tie-breaking
//! heuristic, not for weighted edges.

use crate::alloc_shim::{String, Vec};
use crate::grid::{manhattan, CardinalDirection, CellId, Grid, INFINITY};
use crate::heap::{MinHeap, NOT_FOUND};
use crate::render::{cell_center, overwrite_char, render};

/// A reconstructed path from start to end, in traversal order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub cells: Vec<CellId>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Run A* from `start` to `end` over `grid`'s current known adjacency.
/// On return, every cell reachable from `start` has `g` set to its true
/// edge-count distance and `predecessor` pointing one hop back toward
/// `start`. If `end` is unreachable, the search still runs to completion
/// (open set empties) and `end.g` is left at [`INFINITY`] — this is a
/// valid result, not an error, per the error taxonomy.
pub fn a_star(grid: &mut Grid, start: CellId, end: CellId) {
    grid.clear_heuristics();

    let end_coord = grid.cell(end).coord;
    let start_coord = grid.cell(start).coord;

    grid.cell_mut(start).g = 0;
    grid.cell_mut(start).h = manhattan(start_coord, end_coord);
    grid.cell_mut(start).f = grid.cell(start).h;

    let mut open = MinHeap::with_capacity(grid.len());
    open.insert(start, grid.cell(start).f);

    while let Some(u) = open.peek() {
        if u == end {
            open.pop_min();
            return;
        }
        open.pop_min();
        let u_coord = grid.cell(u).coord;
        let u_g = grid.cell(u).g;

        for dir in CardinalDirection::ALL {
            let Some(v) = grid.cell(u).adjacency(dir) else {
                continue;
            };
            let g_prime = u_g.saturating_add(1);
            if g_prime < grid.cell(v).g {
                grid.cell_mut(v).g = g_prime;
                grid.cell_mut(v).h = manhattan(u_coord, end_coord);
                grid.cell_mut(v).f = grid.cell(v).g.saturating_add(grid.cell(v).h);
                grid.cell_mut(v).predecessor = Some(u);

                let idx = open.find_index_of_cell(v);
                if idx == NOT_FOUND {
                    open.insert(v, grid.cell(v).f);
                } else {
                    open.update_priority(idx, grid.cell(v).f);
                }
            }
        }
    }
}

/// `get_path(end)`: walk predecessors from `end` back to the cell whose
/// predecessor is `None` (the start), then reverse into start-to-end
/// order.
pub fn get_path(grid: &Grid, end: CellId) -> Path {
    let mut cells = Vec::new();
    let mut current = Some(end);
    while let Some(c) = current {
        cells.push(c);
        current = grid.cell(c).predecessor;
    }
    cells.reverse();
    Path { cells }
}

/// `path_to_buffer`: writes each cell's coordinate as two big-endian
/// `u16`s (4 bytes per cell). The length prefix is the caller's
/// responsibility (see `wire::combined_to_buffer`).
pub fn path_to_buffer(grid: &Grid, path: &Path, buf: &mut [u8]) -> Result<usize, crate::error::BufferError> {
    let needed = path.len() * 4;
    if buf.len() < needed {
        return Err(crate::error::BufferError::TooSmall {
            needed,
            available: buf.len(),
        });
    }
    for (i, &cell) in path.cells.iter().enumerate() {
        let coord = grid.cell(cell).coord;
        let offset = i * 4;
        buf[offset] = (coord.x >> 8) as u8;
        buf[offset + 1] = (coord.x & 0xFF) as u8;
        buf[offset + 2] = (coord.y >> 8) as u8;
        buf[offset + 3] = (coord.y & 0xFF) as u8;
    }
    Ok(needed)
}

/// `render_path(grid, path)`: overlay `|`/`-` segments between
/// consecutive cells, `O` at turns, `%` at the start, `X` at the end.
pub fn render_path(grid: &Grid, path: &Path) -> String {
    let mut out = render(grid);
    if path.is_empty() {
        return out;
    }

    for (i, &cell) in path.cells.iter().enumerate() {
        let coord = grid.cell(cell).coord;
        let (row, col) = cell_center(coord.x, coord.y);

        let glyph = if i == 0 {
            '%'
        } else if i == path.len() - 1 {
            'X'
        } else {
            let prev = grid.cell(path.cells[i - 1]).coord;
            let next = grid.cell(path.cells[i + 1]).coord;
            let in_dir = crate::grid::direction_from_to(prev, coord);
            let out_dir = crate::grid::direction_from_to(coord, next);
            match (in_dir, out_dir) {
                (Some(a), Some(b)) if a == b => straight_through_glyph(a),
                _ => 'O',
            }
        };
        overwrite_char(&mut out, row, col, glyph);
    }
    out
}

fn straight_through_glyph(dir: CardinalDirection) -> char {
    match dir {
        CardinalDirection::North | CardinalDirection::South => '|',
        CardinalDirection::East | CardinalDirection::West => '-',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;

    fn column_maze() -> Grid {
        // 10x10, only column 0 connected vertically.
        let mut grid = Grid::create(10, 10);
        for y in 0..9u16 {
            let a = grid.index_of(Coordinate::new(0, y)).unwrap();
            grid.modify_walls(a, crate::grid::GapMask(0b0100), false, true); // South bit
        }
        grid
    }

    #[test]
    fn a_star_on_column_maze_returns_expected_length() {
        let mut grid = column_maze();
        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(0, 9)).unwrap();
        a_star(&mut grid, start, end);
        assert_eq!(grid.cell(end).g, 9);
        let path = get_path(&grid, end);
        assert_eq!(path.len(), 10);
        for (i, &cell) in path.cells.iter().enumerate() {
            assert_eq!(grid.cell(cell).coord, Coordinate::new(0, i as u16));
        }
    }

    #[test]
    fn a_star_unreachable_end_leaves_infinity() {
        let mut grid = Grid::create(3, 3); // fully walled, no edges
        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(2, 2)).unwrap();
        a_star(&mut grid, start, end);
        assert_eq!(grid.cell(end).g, INFINITY);
    }

    #[test]
    fn render_path_contains_exactly_one_start_and_end_marker() {
        let mut grid = column_maze();
        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(0, 9)).unwrap();
        a_star(&mut grid, start, end);
        let path = get_path(&grid, end);
        let rendered = render_path(&grid, &path);
        assert_eq!(rendered.matches('%').count(), 1);
        assert_eq!(rendered.matches('X').count(), 1);
        for ch in rendered.chars() {
            assert!(
                ch.is_whitespace()
                    || matches!(ch, '+' | '-' | '|' | 'O' | '%' | 'X'),
                "unexpected rendered character {ch:?}"
            );
        }
    }
}
