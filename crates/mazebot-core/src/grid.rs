//! The grid model: coordinates, directions, cells, and adjacency.
//!
//! Cells live in one flat, owned array indexed by `y * cols + x`. Every
//! pointer the original maze graph used (neighbour, predecessor) is
//! replaced by an index into that array, wrapped in [`Option`] for
//! "absent" — see `maze_create`/`grid_cell_t` in the original source for
//! the pointer-based version this replaces.

use crate::error::OutOfBounds;

/// Saturating "infinity" sentinel for planner scores, matching `UINT16_MAX`
/// in the original but widened to `u32` since `f = g + h` can otherwise
/// overflow a 16-bit type on larger grids.
pub const INFINITY: u32 = u32::MAX;

/// Index into [`Grid`]'s cell array. Never constructed out of range.
pub type CellId = usize;

/// A grid coordinate: `x` indexes columns, `y` indexes rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: u16,
    pub y: u16,
}

impl Coordinate {
    pub const fn new(x: u16, y: u16) -> Self {
        Coordinate { x, y }
    }
}

/// One of the four compass directions. There is no "none" variant on this
/// type itself — the original's `NONE = 255` sentinel is represented as
/// `Option<CardinalDirection>` at call sites that need it (`direction_from_to`,
/// an uninitialised navigator orientation), which lets the compiler enforce
/// that the sentinel is handled rather than compared against a magic byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl CardinalDirection {
    /// Cardinal order `N, E, S, W`, authoritative wherever "for each
    /// direction" matters (adjacency scans, DFS neighbour selection).
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(CardinalDirection::North),
            1 => Some(CardinalDirection::East),
            2 => Some(CardinalDirection::South),
            3 => Some(CardinalDirection::West),
            _ => None,
        }
    }

    /// `(d + 2) mod 4`.
    pub const fn opposite(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::West => CardinalDirection::East,
        }
    }

    /// Unit step applied to a coordinate when moving one cell in this
    /// direction, as `(dx, dy)` signed deltas.
    const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Render glyph used by [`crate::render::insert_navigator`]: `^ > v <`.
    pub const fn glyph(self) -> char {
        match self {
            CardinalDirection::North => '^',
            CardinalDirection::East => '>',
            CardinalDirection::South => 'v',
            CardinalDirection::West => '<',
        }
    }
}

/// Direction relative to the navigator's current orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelativeDirection {
    Front = 0,
    Right = 1,
    Back = 2,
    Left = 3,
}

impl RelativeDirection {
    const fn from_offset(offset: u8) -> Self {
        match offset % 4 {
            0 => RelativeDirection::Front,
            1 => RelativeDirection::Right,
            2 => RelativeDirection::Back,
            _ => RelativeDirection::Left,
        }
    }
}

/// `(to - from + 4) mod 4` mapped to the relative enum. Note this takes two
/// *directions*, not two coordinates — it answers "if I'm facing `from`,
/// which way do I turn to face `to`?".
pub fn relative_direction(from: CardinalDirection, to: CardinalDirection) -> RelativeDirection {
    let offset = (to.index() as i32 - from.index() as i32 + 4) as u8;
    RelativeDirection::from_offset(offset)
}

/// A 4-bit gap bitmask: bit `d` set means direction `d` is open (no wall).
/// Only the low 4 bits are meaningful; higher bits are ignored by every
/// operation that reads one. Kept as its own type (rather than a bare
/// integer) per the design note that the wall/gap bitmask layer must never
/// be confused with the cardinal-direction-index layer — they happen to
/// share a bit-to-direction mapping here (N=0,E=1,S=2,W=3), but the
/// original's *relative* `wall_direction_t` (FRONT=1,RIGHT=2,BACK=4,LEFT=8)
/// does not, which is exactly the confusion this type prevents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapMask(pub u16);

impl GapMask {
    pub const NONE: GapMask = GapMask(0);
    pub const ALL: GapMask = GapMask(0b1111);

    pub const fn is_open(self, dir: CardinalDirection) -> bool {
        (self.0 >> dir.index()) & 1 != 0
    }

    pub fn set_open(&mut self, dir: CardinalDirection, open: bool) {
        if open {
            self.0 |= 1 << dir.index();
        } else {
            self.0 &= !(1 << dir.index());
        }
    }

    pub const fn as_nibble(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    pub const fn from_nibble(nibble: u8) -> Self {
        GapMask((nibble & 0xF) as u16)
    }
}

/// A sensor/actuator reading relative to the navigator's current facing,
/// as the original's `wall_direction_t` expresses it (`FRONT_WALL = 1`,
/// `RIGHT_WALL = 2`, `BACK_WALL = 4`, `LEFT_WALL = 8`). Drivers produce
/// this; [`align_to_north`] converts it to a [`GapMask`] before it reaches
/// `modify_walls`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RelativeGapMask(pub u8);

impl RelativeGapMask {
    pub const fn is_open(self, rel: RelativeDirection) -> bool {
        (self.0 >> (rel as u8)) & 1 != 0
    }
}

/// Rotate a facing-relative gap reading into the fixed NORTH-aligned
/// [`GapMask`] `modify_walls` expects, using the navigator's current
/// orientation. This is the alignment step spec.md §4.5 leaves to "the
/// implementer".
pub fn align_to_north(reading: RelativeGapMask, facing: CardinalDirection) -> GapMask {
    let mut mask = GapMask::NONE;
    for rel in [
        RelativeDirection::Front,
        RelativeDirection::Right,
        RelativeDirection::Back,
        RelativeDirection::Left,
    ] {
        if reading.is_open(rel) {
            let absolute = CardinalDirection::from_index((facing.index() + rel as usize) % 4)
                .expect("modulo 4 index is always valid");
            mask.set_open(absolute, true);
        }
    }
    mask
}

/// One cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub coord: Coordinate,
    /// Adjacency slots indexed by `CardinalDirection::index()`.
    adjacency: [Option<CellId>; 4],
    pub f: u32,
    pub g: u32,
    pub h: u32,
    pub predecessor: Option<CellId>,
    pub visited: bool,
}

impl GridCell {
    fn new(coord: Coordinate) -> Self {
        GridCell {
            coord,
            adjacency: [None; 4],
            f: 0,
            g: 0,
            h: 0,
            predecessor: None,
            visited: false,
        }
    }

    pub fn adjacency(&self, dir: CardinalDirection) -> Option<CellId> {
        self.adjacency[dir.index()]
    }

    /// The gap-bitmask view of this cell's current adjacency, as consumed
    /// by [`crate::serialize::serialise`].
    pub fn gap_mask(&self) -> GapMask {
        let mut mask = GapMask::NONE;
        for dir in CardinalDirection::ALL {
            mask.set_open(dir, self.adjacency(dir).is_some());
        }
        mask
    }
}

/// The grid: `rows * cols` cells in row-major order, `cells[y * cols + x]`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: crate::alloc_shim::Vec<GridCell>,
    pub rows: u16,
    pub cols: u16,
}

impl Grid {
    /// Allocate an all-walled `rows x cols` grid. Every adjacency slot
    /// starts absent; every cell's coordinate is set per invariant 3.
    pub fn create(rows: u16, cols: u16) -> Self {
        let mut cells = crate::alloc_shim::Vec::with_capacity(rows as usize * cols as usize);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(GridCell::new(Coordinate::new(x, y)));
            }
        }
        Grid { cells, rows, cols }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, id: CellId) -> &GridCell {
        &self.cells[id]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut GridCell {
        &mut self.cells[id]
    }

    /// Index of `(x, y)` in the flat cell array, or `None` if outside the
    /// grid's bounds.
    pub fn index_of(&self, coord: Coordinate) -> Option<CellId> {
        if coord.x < self.cols && coord.y < self.rows {
            Some(coord.y as usize * self.cols as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Return the cell at `coord`, or fail with [`OutOfBounds`] if either
    /// component exceeds the grid.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellId, OutOfBounds> {
        self.index_of(coord).ok_or(OutOfBounds)
    }

    /// The cell one step in `dir` from `cell`, or `None` at the grid
    /// boundary. Independent of wall state — used when setting walls, not
    /// when searching.
    pub fn neighbour(&self, cell: CellId, dir: CardinalDirection) -> Option<CellId> {
        let coord = self.cells[cell].coord;
        let (dx, dy) = dir.delta();
        let x = coord.x as i32 + dx;
        let y = coord.y as i32 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        self.index_of(Coordinate::new(x as u16, y as u16))
    }

    /// Set every cell's `f, g, h` to infinity and clear its `visited` flag.
    /// Adjacency and predecessor pointers are untouched. Idempotent.
    pub fn clear_heuristics(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.f = INFINITY;
            cell.g = INFINITY;
            cell.h = INFINITY;
            cell.visited = false;
        }
    }

    /// Given a bitmask relative to NORTH (bit 0=N, 1=E, 2=S, 3=W), set
    /// walls, unset walls, or overwrite all four sides exactly:
    ///
    /// - `set=true, unset=false`: for each bit that is 0, remove the
    ///   corresponding adjacency (both sides). Bits that are 1 are left
    ///   alone, so existing gaps are never closed.
    /// - `set=false, unset=true`: for each bit that is 1, install the
    ///   corresponding adjacency (both sides).
    /// - `set=true, unset=true`: overwrite exactly — install where the bit
    ///   is 1, remove where it is 0.
    /// - `set=false, unset=false`: no-op, intentionally.
    pub fn modify_walls(&mut self, cell: CellId, mask: GapMask, set: bool, unset: bool) {
        if !set && !unset {
            return;
        }
        for dir in CardinalDirection::ALL {
            let open = mask.is_open(dir);
            // "set" removes the adjacency where the mask bit is clear
            // (a wall); "unset" installs it where the bit is set (a gap).
            // With both flags on this overwrites every side exactly; with
            // only one flag on, the other polarity's sides are untouched.
            let should_install = unset && open;
            let should_remove = set && !open;
            if !should_install && !should_remove {
                continue;
            }
            let Some(neighbour) = self.neighbour(cell, dir) else {
                continue;
            };
            if should_install {
                self.cells[cell].adjacency[dir.index()] = Some(neighbour);
                self.cells[neighbour].adjacency[dir.opposite().index()] = Some(cell);
            } else {
                self.cells[cell].adjacency[dir.index()] = None;
                self.cells[neighbour].adjacency[dir.opposite().index()] = None;
            }
        }
    }

    /// Open (or close) every adjacency slot, used to build the DFS
    /// explorer's starting grid, which assumes all sides open until
    /// `sense` proves otherwise.
    pub fn open_all_walls(&mut self) {
        for id in 0..self.cells.len() {
            for dir in CardinalDirection::ALL {
                if let Some(neighbour) = self.neighbour(id, dir) {
                    self.cells[id].adjacency[dir.index()] = Some(neighbour);
                    self.cells[neighbour].adjacency[dir.opposite().index()] = Some(id);
                }
            }
        }
    }
}

/// `|ax - bx| + |ay - by|`.
pub fn manhattan(a: Coordinate, b: Coordinate) -> u32 {
    let dx = (a.x as i32 - b.x as i32).unsigned_abs();
    let dy = (a.y as i32 - b.y as i32).unsigned_abs();
    dx + dy
}

/// The cardinal direction from `a` to `b`, or `None` if they are not
/// exactly one step apart.
pub fn direction_from_to(a: Coordinate, b: Coordinate) -> Option<CardinalDirection> {
    let dx = b.x as i32 - a.x as i32;
    let dy = b.y as i32 - a.y as i32;
    match (dx, dy) {
        (0, -1) => Some(CardinalDirection::North),
        (1, 0) => Some(CardinalDirection::East),
        (0, 1) => Some(CardinalDirection::South),
        (-1, 0) => Some(CardinalDirection::West),
        _ => None,
    }
}

/// The navigator's position, endpoints, and facing. `current` is mutated
/// by the DFS/planner drivers; `start` and `end` are fixed per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigatorState {
    pub current: CellId,
    pub start: CellId,
    pub end: CellId,
    pub orientation: CardinalDirection,
}

impl NavigatorState {
    pub fn new(start: CellId, end: CellId, orientation: CardinalDirection) -> Self {
        NavigatorState {
            current: start,
            start,
            end,
            orientation,
        }
    }
}


/// Snapshot (de)serialization through `serde_json`, exercised only under the
/// optional `serde` feature — this is the host-side debug/snapshot path
/// `Cargo.toml` documents, not the hand-rolled wire format in `serialize.rs`.
#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trips_through_serde_json() {
        let mut grid = Grid::create(2, 3);
        grid.open_all_walls();
        grid.modify_walls(0, GapMask(0b0110), true, false);

        let json = serde_json::to_string(&grid).unwrap();
        let decoded: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.rows, grid.rows);
        assert_eq!(decoded.cols, grid.cols);
        for id in 0..grid.len() {
            assert_eq!(decoded.cell(id).coord, grid.cell(id).coord);
            assert_eq!(decoded.cell(id).gap_mask(), grid.cell(id).gap_mask());
        }
    }

    #[test]
    fn navigator_state_round_trips_through_serde_json() {
        let grid = Grid::create(4, 4);
        let nav = NavigatorState::new(
            grid.index_of(Coordinate::new(0, 0)).unwrap(),
            grid.index_of(Coordinate::new(3, 3)).unwrap(),
            CardinalDirection::East,
        );

        let json = serde_json::to_string(&nav).unwrap();
        let decoded: NavigatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, nav);
    }
}
