//! Cross-module integration scenarios, mirroring the concrete seeded
//! tests enumerated for this engine: Manhattan sanity, the 5x5 maze
//! fixture's deserialise/render round-trip and A* path, DFS
//! exhaustiveness, and the 6x4 combined-buffer layout.

use mazebot_core::astar::{a_star, get_path, render_path};
use mazebot_core::explorer::explore;
use mazebot_core::grid::{manhattan, CardinalDirection, Coordinate, GapMask, Grid, NavigatorState};
use mazebot_core::sensor::{apply_move, Actuator, Sensor};
use mazebot_core::serialize::{deserialise, serialise};
use mazebot_core::wire::combined_to_buffer;

const FIXTURE_5X5: [u8; 25] = [
    0x2, 0xE, 0xA, 0xC, 0x4, 0x6, 0xB, 0xC, 0x3, 0x9, 0x3, 0x8, 0x7, 0x8, 0x4, 0x4, 0x4, 0x7, 0xA,
    0xD, 0x3, 0xB, 0x9, 0x2, 0x9,
];

fn fixture_grid() -> Grid {
    let masks: Vec<GapMask> = FIXTURE_5X5.iter().map(|&n| GapMask::from_nibble(n)).collect();
    let mut grid = Grid::create(5, 5);
    deserialise(&mut grid, &masks).unwrap();
    grid
}

#[test]
fn manhattan_sanity_over_10x10_grid() {
    let origin = Coordinate::new(0, 0);
    for y in 0..10u16 {
        for x in 0..10u16 {
            let b = Coordinate::new(x, y);
            assert_eq!(manhattan(origin, b), (b.x + b.y) as u32);
        }
    }
}

#[test]
fn fixture_5x5_deserialise_then_serialise_round_trips() {
    let grid = fixture_grid();
    let masks = serialise(&grid);
    let reproduced: Vec<u8> = masks.iter().map(|m| m.as_nibble()).collect();
    assert_eq!(reproduced, FIXTURE_5X5);
}

#[test]
fn a_star_complex_5x5_path_matches_bfs_distance_and_renders_cleanly() {
    let mut grid = fixture_grid();
    let start = grid.index_of(Coordinate::new(0, 4)).unwrap();
    let end = grid.index_of(Coordinate::new(4, 0)).unwrap();
    a_star(&mut grid, start, end);

    let path = get_path(&grid, end);
    assert_eq!(path.len() as u32, grid.cell(end).g + 1);

    let rendered = render_path(&grid, &path);
    assert_eq!(rendered.matches('%').count(), 1);
    assert_eq!(rendered.matches('X').count(), 1);
    for ch in rendered.chars() {
        assert!(
            ch.is_whitespace() || matches!(ch, '+' | '-' | '|' | 'O' | '%' | 'X'),
            "unexpected character {ch:?} in rendered path"
        );
    }
}

/// A sensor/actuator double that reports the true fixture's gap mask at
/// whatever cell the navigator currently stands on, and otherwise just
/// performs the standard move bookkeeping.
struct TruthDriver<'a> {
    truth: &'a Grid,
}

impl<'a> Sensor for TruthDriver<'a> {
    fn sense(&mut self, _grid: &Grid, nav: &NavigatorState, _facing: CardinalDirection) -> GapMask {
        self.truth.cell(nav.current).gap_mask()
    }
}

impl<'a> Actuator for TruthDriver<'a> {
    fn move_navigator(&mut self, grid: &Grid, nav: &mut NavigatorState, direction: CardinalDirection) {
        apply_move(grid, nav, direction);
    }
}

#[test]
fn dfs_visits_every_cell_reachable_in_the_true_5x5_maze() {
    let truth = fixture_grid();
    let mut grid = Grid::create(5, 5);
    grid.open_all_walls();

    let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
    let end = grid.index_of(Coordinate::new(4, 4)).unwrap();
    let mut nav = NavigatorState::new(start, end, CardinalDirection::North);

    let mut driver = TruthDriver { truth: &truth };
    explore(&mut grid, &mut nav, &mut driver);

    // Every cell reachable from start in the true maze must end up visited.
    let mut stack = vec![start];
    let mut seen = vec![false; truth.len()];
    seen[start] = true;
    while let Some(u) = stack.pop() {
        for dir in CardinalDirection::ALL {
            if let Some(v) = truth.cell(u).adjacency(dir) {
                if !seen[v] {
                    seen[v] = true;
                    stack.push(v);
                    let coord = truth.cell(v).coord;
                    let mapped = grid.index_of(coord).unwrap();
                    assert!(grid.cell(mapped).visited, "cell {coord:?} should be visited");
                }
            }
        }
    }
}

#[test]
fn combined_buffer_matches_6x4_layout_with_the_given_endpoints() {
    let mut grid = Grid::create(6, 4);
    grid.open_all_walls();

    let start = grid.index_of(Coordinate::new(2, 5)).unwrap();
    let end = grid.index_of(Coordinate::new(1, 0)).unwrap();
    a_star(&mut grid, start, end);
    let path = get_path(&grid, end);
    let nav = NavigatorState::new(start, end, CardinalDirection::North);

    let expected_len = 4 + 12 + 2 + 4 * path.len() + 13;
    let mut buf = vec![0u8; expected_len];
    let written = combined_to_buffer(&grid, &path, &nav, &mut buf).unwrap();
    assert_eq!(written, expected_len);
    assert_eq!(&buf[0..4], &[0, 6, 0, 4]);
}
