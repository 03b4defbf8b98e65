//! Single place that picks `std` vs `alloc` collections, the same switch
//! the teacher crate performs inline in its `lib.rs`. Centralized here
//! because this crate is split across many files instead of one.

#[cfg(not(feature = "std"))]
pub use alloc::{
    format,
    string::String,
    vec,
    vec::Vec,
};

#[cfg(feature = "std")]
pub use std::{format, string::String, vec, vec::Vec};
