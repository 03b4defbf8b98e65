//! mazebot-firmware — peripheral drivers, platform setup, and the main loop
//! that wires them into `mazebot-core`'s pathfinding engine.
//!
//! Split into a library (this crate root, so driver unit tests can run on
//! the host under `cargo test`) and a thin `main.rs` binary that only the
//! real MCU target builds. `no_std` except under `cfg(test)`, the same way
//! embedded crates in this corpus keep their driver logic host-testable
//! without dragging `std` onto the target.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod board;
pub mod drivers;
pub mod pid;
pub mod transport;
