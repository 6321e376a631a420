//! Structure implementations for gridviz.
//!
//! - [`StructuredGrid`] - a regular grid with one cell scalar field
//! - [`build_grid`] - wraps a validated numeric array into a [`StructuredGrid`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Grid indices are u32 and convert to f32 world coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod builder;
pub mod structured_grid;

pub use builder::{build_grid, GridMetadata};
pub use structured_grid::{CellScalarField, StructuredGrid};
