//! Building structured grids from numeric arrays.

use glam::{UVec3, Vec3};
use gridviz_core::{GridError, Options, Result};
use ndarray::{ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;

use crate::structured_grid::{check_spacing, CellScalarField, StructuredGrid};

/// Placement of a grid in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetadata {
    origin: Vec3,
    spacing: Vec3,
}

impl GridMetadata {
    /// Creates grid metadata. Spacing must be > 0 along every axis.
    pub fn new(origin: Vec3, spacing: Vec3) -> Result<Self> {
        check_spacing(spacing)?;
        Ok(Self { origin, spacing })
    }

    /// Metadata taken from configured options.
    pub fn from_options(options: &Options) -> Result<Self> {
        Self::new(options.origin, options.spacing)
    }

    /// Returns the origin.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the spacing.
    #[must_use]
    pub fn spacing(&self) -> Vec3 {
        self.spacing
    }
}

/// Wraps a numeric array into a [`StructuredGrid`].
///
/// The grid gets `shape[axis] + 1` points along every array axis, plus a
/// size-1 third axis for rank-2 arrays. The array is flattened in row-major
/// order and attached as the cell scalar field `field_name`.
///
/// The array must already have passed
/// [`check_array_dimensions`](gridviz_core::check_array_dimensions) against
/// the extent the caller renders with. This function does not know that
/// extent and does not repeat the check; it only rejects arrays no grid can
/// be built from (rank other than 2 or 3, empty axes).
pub fn build_grid<S, D>(
    array: &ArrayBase<S, D>,
    metadata: &GridMetadata,
    field_name: &str,
) -> Result<StructuredGrid>
where
    S: Data,
    S::Elem: AsPrimitive<f64>,
    D: Dimension,
{
    let dimensions = point_dimensions(array.shape())?;
    let values: Vec<f64> = array.iter().map(|&v| v.as_()).collect();

    log::debug!(
        "building {}x{}x{} grid with cell field '{field_name}' ({} values)",
        dimensions.x,
        dimensions.y,
        dimensions.z,
        values.len()
    );

    StructuredGrid::new(
        dimensions,
        metadata.origin(),
        metadata.spacing(),
        CellScalarField::new(field_name, values),
    )
}

fn point_dimensions(shape: &[usize]) -> Result<UVec3> {
    if !matches!(shape.len(), 2 | 3) {
        return Err(GridError::UnsupportedDimensionality(shape.len()));
    }
    if shape.contains(&0) {
        return Err(GridError::InvalidShape(
            shape.to_vec(),
            "every axis needs at least one cell",
        ));
    }

    let points = |cells: usize| {
        cells
            .checked_add(1)
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| GridError::InvalidShape(shape.to_vec(), "axis too large for a grid"))
    };

    let z = match shape.get(2) {
        Some(&cells) => points(cells)?,
        None => 1,
    };
    Ok(UVec3::new(points(shape[0])?, points(shape[1])?, z))
}
