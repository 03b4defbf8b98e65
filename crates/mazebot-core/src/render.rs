//! ASCII rendering of the grid for logs and interactive debugging. Not
//! part of the wire format — ported from `maze_get_string`/`draw_cell`/
//! `maze_insert_nav_str` in the original.

use crate::alloc_shim::String;
use crate::grid::{CardinalDirection, Grid, NavigatorState};

/// `render(grid)`: `+---+` tops, `|` sides, a blank interior where an
/// adjacency exists in that direction, a wall character otherwise. Each
/// cell occupies a 4x2 character block; the final row/column of `+`s
/// closes the grid.
pub fn render(grid: &Grid) -> String {
    let rows = grid.rows as usize;
    let cols = grid.cols as usize;
    let mut out = String::new();

    for y in 0..rows {
        // Top border of this row: "+---+---+...", walled unless the cell
        // above has a NORTH adjacency (row 0 is always walled on top).
        for x in 0..cols {
            out.push('+');
            let id = grid.index_of(crate::grid::Coordinate::new(x as u16, y as u16)).unwrap();
            let open_north = grid.cell(id).adjacency(CardinalDirection::North).is_some();
            out.push_str(if open_north { "   " } else { "---" });
        }
        out.push_str("+\n");

        // Cell row: west wall, interior space, repeat; east wall on the
        // last column.
        for x in 0..cols {
            let id = grid.index_of(crate::grid::Coordinate::new(x as u16, y as u16)).unwrap();
            let open_west = grid.cell(id).adjacency(CardinalDirection::West).is_some();
            out.push(if open_west { ' ' } else { '|' });
            out.push_str("   ");
        }
        let last_id = grid
            .index_of(crate::grid::Coordinate::new((cols - 1) as u16, y as u16))
            .unwrap();
        let east_open = grid.cell(last_id).adjacency(CardinalDirection::East).is_some();
        out.push(if east_open { ' ' } else { '|' });
        out.push('\n');
    }

    // Bottom border: walled unless the bottom row cell has a SOUTH
    // adjacency.
    for x in 0..cols {
        out.push('+');
        let id = grid
            .index_of(crate::grid::Coordinate::new(x as u16, (rows - 1) as u16))
            .unwrap();
        let open_south = grid.cell(id).adjacency(CardinalDirection::South).is_some();
        out.push_str(if open_south { "   " } else { "---" });
    }
    out.push_str("+\n");
    out
}

const CELL_WIDTH: usize = 4;
const CELL_HEIGHT: usize = 2;

/// Row/column of the character that sits in the center of the cell block
/// at `(x, y)` within a string laid out by [`render`]. Used both by
/// [`insert_navigator`] and by `astar::render_path`'s overlay.
pub(crate) fn cell_center(x: u16, y: u16) -> (usize, usize) {
    let row = y as usize * CELL_HEIGHT + 1;
    let col = x as usize * CELL_WIDTH + 2;
    (row, col)
}

/// Overwrite the character at `(row, col)` in a rendered grid string
/// (as produced by [`render`]), where the string is a sequence of
/// newline-terminated lines of equal width.
pub(crate) fn overwrite_char(rendered: &mut String, row: usize, col: usize, glyph: char) {
    let line_width = rendered.lines().next().map_or(0, |l| l.chars().count()) + 1; // +1 for '\n'
    let idx = row * line_width + col;
    if let Some((start, ch)) = rendered.char_indices().nth(idx) {
        let end = start + ch.len_utf8();
        rendered.replace_range(start..end, &glyph.to_string());
    }
}

/// `insert_navigator(grid, nav, str)`: overwrite the center character of
/// the navigator's cell with a glyph chosen from orientation (`^ > v <`
/// for N/E/S/W).
pub fn insert_navigator(grid: &Grid, nav: &NavigatorState, rendered: &mut String) {
    let coord = grid.cell(nav.current).coord;
    let (row, col) = cell_center(coord.x, coord.y);
    overwrite_char(rendered, row, col, nav.orientation.glyph());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CardinalDirection, Coordinate};

    #[test]
    fn render_fully_walled_grid_has_all_borders() {
        let grid = Grid::create(2, 2);
        let s = render(&grid);
        // every interior side should be a wall character.
        assert!(s.contains("---"));
        assert!(s.matches('|').count() >= 4);
    }

    #[test]
    fn render_open_adjacency_leaves_gap() {
        let mut grid = Grid::create(1, 2);
        grid.open_all_walls();
        let s = render(&grid);
        // the shared vertical wall between the two cells should be open.
        let middle_line = s.lines().nth(1).unwrap();
        assert!(middle_line.contains(' '));
    }

    #[test]
    fn insert_navigator_writes_orientation_glyph() {
        let grid = Grid::create(2, 2);
        let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
        let end = grid.index_of(Coordinate::new(1, 1)).unwrap();
        let nav = NavigatorState::new(start, end, CardinalDirection::East);
        let mut s = render(&grid);
        insert_navigator(&grid, &nav, &mut s);
        assert!(s.contains('>'));
    }
}
