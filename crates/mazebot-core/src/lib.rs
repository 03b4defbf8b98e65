//! mazebot-core — maze mapping, serialization, and pathfinding engine.
//!
//! This crate implements the abstract graph engine behind an autonomous
//! maze-solving robot's firmware: a rectangular grid of cells with
//! per-cell wall/gap state, a depth-first explorer driven by a pluggable
//! sensor/actuator interface, an A* planner, a flood-fill distance field
//! for online re-planning, and a compact binary wire format for sending
//! grid/navigator/path state to a host.
//!
//! Peripheral drivers and platform setup live in the sibling
//! `mazebot-firmware` crate; this crate only knows about cells,
//! directions, and byte buffers, and builds `no_std` + `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub(crate) mod alloc_shim;

pub mod error;
pub mod grid;
pub mod heap;
pub mod serialize;
pub mod render;
pub mod astar;
pub mod floodfill;
pub mod sensor;
pub mod explorer;
pub mod wire;

pub use error::{BufferError, OutOfBounds};
pub use grid::{
    align_to_north, manhattan, relative_direction, CardinalDirection, Coordinate, GapMask, Grid,
    GridCell, NavigatorState, RelativeDirection, RelativeGapMask, INFINITY,
};
pub use sensor::{apply_move, Actuator, Sensor};
