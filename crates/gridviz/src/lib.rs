//! gridviz: one-call off-screen visualization of dense scalar grids.
//!
//! Arrays produced by a simulation are checked against fixed extents, wrapped
//! into a structured grid and rendered headlessly to an image file. No window
//! or display is ever needed.
//!
//! # Quick Start
//!
//! ```no_run
//! use gridviz::*;
//! use ndarray::Array3;
//!
//! fn main() -> Result<()> {
//!     // (100, 100, 50) cells for the default (101, 101, 51) point extent
//!     let spins = Array3::<f64>::ones((100, 100, 50));
//!     render_3d_array(&spins, DEFAULT_ARRAY_FILENAME)?;
//!     Ok(())
//! }
//! ```
//!
//! # Dispatch
//!
//! [`render_surface_or_volume`] draws a grid with a size-1 axis as a shaded
//! surface and everything else as a volume. [`render_2d_array`] and
//! [`render_3d_array`] validate raw arrays first and pick the path directly.
//!
//! Every entry point has a `*_with_options` variant taking [`Options`]; the
//! plain variants use `Options::default()`. Set `RUST_LOG=debug` to trace
//! context acquisition and dispatch decisions.

// Documentation lints - entry points document their errors once, here
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod dispatch;

use thiserror::Error;

// Re-export core types
pub use gridviz_core::{
    check_array_dimensions, check_shape, Extent, GridError, GridStructure, Options, UVec3, Vec3,
    CELL_DATA, DEFAULT_ARRAY_FILENAME, DEFAULT_GRID_FILENAME, DEFAULT_WINDOW_SIZE,
    EXTENT_SIZE_2D, EXTENT_SIZE_3D, ORIGIN, SPACING,
};

// Re-export render types
pub use gridviz_render::{
    ColorMap, MeshStyle, Plotter, PlotterOptions, RenderError, ScalarBarArgs, MAX_WINDOW_SIDE,
};

// Re-export structures
pub use gridviz_structures::{build_grid, CellScalarField, GridMetadata, StructuredGrid};

pub use dispatch::{
    render_2d_array, render_2d_array_with_options, render_3d_array, render_3d_array_with_options,
    render_mode, render_surface_or_volume, render_surface_or_volume_with_options, RenderMode,
};

/// The error type for gridviz operations.
///
/// Both kinds are passed through unchanged: a shape problem is reported before
/// any rendering resource exists, a rendering failure exactly as the renderer
/// raised it.
#[derive(Error, Debug)]
pub enum Error {
    /// The input array or grid metadata was rejected.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The renderer failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A specialized Result type for gridviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Initializes `env_logger` once; later calls are no-ops.
///
/// Every render entry point calls this, so `RUST_LOG` works without setup.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
