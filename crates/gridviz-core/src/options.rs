//! Configuration options for gridviz.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extent::Extent;

/// World position of the first grid point.
pub const ORIGIN: Vec3 = Vec3::ZERO;

/// Distance between adjacent grid points.
pub const SPACING: Vec3 = Vec3::ONE;

/// Name of the cell scalar field attached to grids built from arrays.
pub const CELL_DATA: &str = "Spin";

/// Output file used when rendering a prebuilt grid.
pub const DEFAULT_GRID_FILENAME: &str = "visualization.png";

/// Output file used when rendering a raw array.
pub const DEFAULT_ARRAY_FILENAME: &str = "visual_np.png";

/// Off-screen window size in pixels.
pub const DEFAULT_WINDOW_SIZE: [u32; 2] = [1024, 768];

/// Process-wide configuration for validation, grid building and rendering.
///
/// Values are immutable once built and are passed by reference into each
/// render call. [`Options::default`] reproduces the built-in constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Expected point extent of volume arrays.
    pub extent_3d: Extent,

    /// Expected point extent of plane arrays.
    pub extent_2d: Extent,

    /// Grid origin for grids built from arrays.
    pub origin: Vec3,

    /// Grid spacing for grids built from arrays.
    pub spacing: Vec3,

    /// Name of the cell scalar field.
    pub field_name: String,

    /// Off-screen window size (width, height).
    pub window_size: [u32; 2],

    /// Background color.
    pub background_color: Vec3,

    /// Whether to draw a scalar bar when a render path does not ask for one.
    pub show_scalar_bar: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extent_3d: Extent::volume(),
            extent_2d: Extent::plane(),
            origin: ORIGIN,
            spacing: SPACING,
            field_name: CELL_DATA.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            background_color: Vec3::new(1.0, 1.0, 1.0),
            show_scalar_bar: true,
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded options from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
