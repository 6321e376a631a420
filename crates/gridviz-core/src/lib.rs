//! Core abstractions for gridviz.
//!
//! This crate provides the fundamental types shared by the other gridviz crates:
//! - [`Extent`] and the fixed extents numeric output is checked against
//! - [`check_array_dimensions`], the shape validator
//! - [`GridStructure`], the trait renderable grids implement
//! - [`Options`], immutable process-wide configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Grid sizes are u32 on the geometry side and usize on the array side
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod extent;
pub mod options;
pub mod shape;
pub mod structure;

pub use error::{GridError, Result};
pub use extent::{Extent, EXTENT_SIZE_2D, EXTENT_SIZE_3D};
pub use options::{
    Options, CELL_DATA, DEFAULT_ARRAY_FILENAME, DEFAULT_GRID_FILENAME, DEFAULT_WINDOW_SIZE, ORIGIN,
    SPACING,
};
pub use shape::{check_array_dimensions, check_shape};
pub use structure::GridStructure;

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
