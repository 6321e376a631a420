//! Structured grid structure for regular 2D and 3D scalar data.

mod cell_scalar;

pub use cell_scalar::CellScalarField;

use glam::{UVec3, Vec3};
use gridviz_core::{GridError, GridStructure, Result};

/// A regular axis-aligned grid with one cell scalar field.
///
/// `StructuredGrid` is defined by:
/// - Grid dimensions (number of points in X, Y, Z)
/// - Origin (position of the first point)
/// - Spacing (distance between adjacent points along each axis)
///
/// Planar data uses a size-1 axis. The grid is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredGrid {
    dimensions: UVec3,
    origin: Vec3,
    spacing: Vec3,
    field: CellScalarField,
}

impl StructuredGrid {
    /// Creates a new structured grid.
    ///
    /// # Arguments
    /// * `dimensions` - Number of points in each dimension (X, Y, Z), each >= 1
    /// * `origin` - Position of the first grid point
    /// * `spacing` - Point spacing along each axis, each > 0
    /// * `field` - Cell scalar field holding exactly one value per cell
    pub fn new(
        dimensions: UVec3,
        origin: Vec3,
        spacing: Vec3,
        field: CellScalarField,
    ) -> Result<Self> {
        if dimensions.min_element() == 0 {
            return Err(GridError::InvalidShape(
                dimensions.to_array().iter().map(|&d| d as usize).collect(),
                "grid dimensions must be >= 1 along every axis",
            ));
        }
        check_spacing(spacing)?;

        let grid = Self {
            dimensions,
            origin,
            spacing,
            field,
        };
        if grid.num_cells() != grid.field.len() {
            return Err(GridError::FieldSizeMismatch {
                expected: grid.num_cells(),
                actual: grid.field.len(),
            });
        }
        Ok(grid)
    }

    /// Returns the attached cell scalar field.
    #[must_use]
    pub fn field(&self) -> &CellScalarField {
        &self.field
    }

    /// Returns the world position of a point at the given 3D index.
    #[must_use]
    pub fn position_of_point(&self, i: u32, j: u32, k: u32) -> Vec3 {
        self.origin + Vec3::new(i as f32, j as f32, k as f32) * self.spacing
    }
}

impl GridStructure for StructuredGrid {
    fn dimensions(&self) -> UVec3 {
        self.dimensions
    }

    fn origin(&self) -> Vec3 {
        self.origin
    }

    fn spacing(&self) -> Vec3 {
        self.spacing
    }

    fn field_name(&self) -> &str {
        self.field.name()
    }

    fn cell_values(&self) -> &[f64] {
        self.field.values()
    }

    fn data_range(&self) -> (f64, f64) {
        self.field.data_range()
    }
}

/// Rejects spacings that are not strictly positive.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn check_spacing(spacing: Vec3) -> Result<()> {
    for (axis, value) in spacing.to_array().into_iter().enumerate() {
        // written this way so NaN is rejected too
        if !(value > 0.0) {
            return Err(GridError::InvalidSpacing { axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(n: usize) -> CellScalarField {
        CellScalarField::new("Spin", (0..n).map(|v| v as f64).collect())
    }

    #[test]
    fn test_structured_grid_creation() {
        let grid = StructuredGrid::new(
            UVec3::new(10, 20, 30),
            Vec3::ZERO,
            Vec3::ONE,
            field(9 * 19 * 29),
        )
        .unwrap();
        assert_eq!(grid.dimensions(), UVec3::new(10, 20, 30));
        assert_eq!(grid.cell_dim(), UVec3::new(9, 19, 29));
        assert_eq!(grid.num_cells(), 9 * 19 * 29);
        assert_eq!(grid.field_name(), "Spin");
    }

    #[test]
    fn test_flat_grid_creation() {
        let grid =
            StructuredGrid::new(UVec3::new(5, 4, 1), Vec3::ZERO, Vec3::ONE, field(12)).unwrap();
        assert_eq!(grid.cell_dim(), UVec3::new(4, 3, 1));
    }

    #[test]
    fn test_field_size_mismatch() {
        let err = StructuredGrid::new(UVec3::new(3, 3, 3), Vec3::ZERO, Vec3::ONE, field(7))
            .unwrap_err();
        assert!(matches!(
            err,
            GridError::FieldSizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_invalid_spacing() {
        let err = StructuredGrid::new(
            UVec3::new(2, 2, 2),
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 1.0),
            field(1),
        )
        .unwrap_err();
        assert!(matches!(err, GridError::InvalidSpacing { axis: 1, .. }));

        let nan = Vec3::new(1.0, 1.0, f32::NAN);
        assert!(check_spacing(nan).is_err());
    }

    #[test]
    fn test_zero_dimension() {
        let err = StructuredGrid::new(UVec3::new(0, 2, 2), Vec3::ZERO, Vec3::ONE, field(1))
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidShape(..)));
    }

    #[test]
    fn test_point_position() {
        let grid = StructuredGrid::new(
            UVec3::new(3, 3, 3),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.5, 1.0, 2.0),
            field(8),
        )
        .unwrap();

        let p = grid.position_of_point(2, 2, 2);
        assert!((p - Vec3::new(2.0, 4.0, 7.0)).length() < 1e-6);

        let (min, max) = grid.bounding_box();
        assert_eq!(min, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(max, p);
    }
}
