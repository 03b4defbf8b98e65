//! Combined wire buffer: grid, path, and navigator state packed together
//! for a single transmission to the host, per the external interfaces
//! section. Built from the pieces in `serialize.rs` and `astar.rs`.

use crate::astar::{path_to_buffer, Path};
use crate::error::BufferError;
use crate::grid::Grid;
use crate::serialize::{nav_to_buffer, serialise, serialised_to_buffer, serialised_len, NAV_BUFFER_LEN};
use crate::grid::NavigatorState;

/// Total byte length [`combined_to_buffer`] will write for `grid` and a
/// path of `path_len` cells: `maze_header + maze_gaps + path_length +
/// path_cells + navigator`.
pub fn combined_len(grid: &Grid, path_len: usize) -> usize {
    serialised_len(grid.rows, grid.cols) + 2 + path_len * 4 + NAV_BUFFER_LEN
}

/// Write the grid, path, and navigator into one buffer:
/// 1. `maze_header` + `maze_gaps` (via [`serialised_to_buffer`]).
/// 2. `path_length` (2 bytes, big-endian).
/// 3. `path_cells` (4 bytes per cell).
/// 4. `navigator` (see [`nav_to_buffer`]).
///
/// Returns the number of bytes written, or [`BufferError::TooSmall`] if
/// `buf` is smaller than [`combined_len`].
pub fn combined_to_buffer(
    grid: &Grid,
    path: &Path,
    nav: &NavigatorState,
    buf: &mut [u8],
) -> Result<usize, BufferError> {
    let needed = combined_len(grid, path.len());
    if buf.len() < needed {
        return Err(BufferError::TooSmall {
            needed,
            available: buf.len(),
        });
    }

    let masks = serialise(grid);
    let gaps_len = serialised_to_buffer(&masks, grid.rows, grid.cols, buf)?;

    let path_len_offset = gaps_len;
    let path_len = path.len() as u16;
    buf[path_len_offset] = (path_len >> 8) as u8;
    buf[path_len_offset + 1] = (path_len & 0xFF) as u8;

    let path_cells_offset = path_len_offset + 2;
    let path_bytes = path_to_buffer(grid, path, &mut buf[path_cells_offset..])?;

    let nav_offset = path_cells_offset + path_bytes;
    nav_to_buffer(nav, grid, &mut buf[nav_offset..])?;

    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::{a_star, get_path};
    use crate::grid::{CardinalDirection, Coordinate};

    #[test]
    fn combined_to_buffer_writes_exact_length_for_6x4_fixture() {
        // 6 rows, 4 columns; the scenario only needs adjacency dense
        // enough to connect start to end, so open every wall.
        let mut grid = Grid::create(6, 4);
        grid.open_all_walls();

        let start_coord = Coordinate::new(2, 5);
        let end_coord = Coordinate::new(1, 0);
        let start = grid.index_of(start_coord).unwrap();
        let end = grid.index_of(end_coord).unwrap();

        a_star(&mut grid, start, end);
        let path = get_path(&grid, end);
        let nav = NavigatorState::new(start, end, CardinalDirection::North);

        let needed = combined_len(&grid, path.len());
        assert_eq!(needed, 4 + 12 + 2 + 4 * path.len() + NAV_BUFFER_LEN);

        let mut buf = crate::alloc_shim::vec![0u8; needed];
        let written = combined_to_buffer(&grid, &path, &nav, &mut buf).unwrap();
        assert_eq!(written, needed);

        assert_eq!(&buf[0..4], &[0, 6, 0, 4]);

        let path_len_offset = 4 + 12;
        let decoded_path_len =
            ((buf[path_len_offset] as u16) << 8) | buf[path_len_offset + 1] as u16;
        assert_eq!(decoded_path_len as usize, path.len());
    }

    #[test]
    fn combined_to_buffer_reports_too_small() {
        let grid = Grid::create(2, 2);
        let path = Path { cells: crate::alloc_shim::Vec::new() };
        let nav = NavigatorState::new(0, 3, CardinalDirection::North);
        let mut buf = [0u8; 1];
        assert!(combined_to_buffer(&grid, &path, &nav, &mut buf).is_err());
    }
}
