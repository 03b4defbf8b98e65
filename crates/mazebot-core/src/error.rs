//! Error types for the grid, serialization, and planning operations.
//!
//! Kept as hand-written enums with a manual [`core::fmt::Display`] impl
//! rather than pulling in `thiserror`, so the crate stays usable from a
//! `no_std` build without a proc-macro dependency.

use core::fmt;

/// Errors that can arise when writing the wire format into a caller-supplied
/// buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The destination buffer is smaller than the section being written.
    TooSmall {
        /// Number of bytes the write needed.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },
    /// The bitmask array passed to `deserialise` does not match the grid's
    /// dimensions.
    DimensionMismatch,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::TooSmall { needed, available } => write!(
                f,
                "buffer too small: needed {needed} bytes, have {available}"
            ),
            BufferError::DimensionMismatch => {
                write!(f, "bitmask array dimensions do not match the grid")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

/// Errors that can arise from coordinate lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds;

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate is outside the grid bounds")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfBounds {}
