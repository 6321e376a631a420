//! Structure trait for renderable grids.
//!
//! A [`GridStructure`] is the narrow interface between grid representations
//! and the renderer: regular, axis-aligned geometry plus one named scalar
//! field stored per cell.

use glam::{UVec3, Vec3};

/// A structured grid carrying one cell scalar field.
///
/// Geometry always has three axes. Planar data uses a size-1 axis.
pub trait GridStructure {
    /// Number of grid points along each axis.
    fn dimensions(&self) -> UVec3;

    /// World position of the first grid point.
    fn origin(&self) -> Vec3;

    /// Distance between adjacent points along each axis.
    fn spacing(&self) -> Vec3;

    /// Name of the attached cell scalar field.
    fn field_name(&self) -> &str;

    /// Cell values, flattened in row-major order over [`Self::cell_dim`].
    fn cell_values(&self) -> &[f64];

    /// Minimum and maximum of the finite cell values.
    fn data_range(&self) -> (f64, f64);

    /// Number of cells along each axis.
    ///
    /// An axis with a single point still holds one layer of cells.
    fn cell_dim(&self) -> UVec3 {
        let dims = self.dimensions();
        UVec3::new(
            cells_along(dims.x),
            cells_along(dims.y),
            cells_along(dims.z),
        )
    }

    /// Total number of cells.
    fn num_cells(&self) -> usize {
        let c = self.cell_dim();
        c.x as usize * c.y as usize * c.z as usize
    }

    /// Flattens a cell index. The last axis varies fastest.
    fn cell_index(&self, i: u32, j: u32, k: u32) -> usize {
        let c = self.cell_dim();
        (i as usize * c.y as usize + j as usize) * c.z as usize + k as usize
    }

    /// Value of the cell at `(i, j, k)`, or `NaN` outside the grid.
    fn cell_value(&self, i: u32, j: u32, k: u32) -> f64 {
        let c = self.cell_dim();
        if i >= c.x || j >= c.y || k >= c.z {
            return f64::NAN;
        }
        self.cell_values()
            .get(self.cell_index(i, j, k))
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// Axis-aligned bounding box in world coordinates.
    fn bounding_box(&self) -> (Vec3, Vec3) {
        let min = self.origin();
        let span = (self.dimensions().as_vec3() - Vec3::ONE) * self.spacing();
        (min, min + span)
    }

    /// Characteristic length scale (bounding box diagonal).
    fn length_scale(&self) -> f32 {
        let (min, max) = self.bounding_box();
        (max - min).length()
    }
}

fn cells_along(points: u32) -> u32 {
    if points > 1 {
        points - 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        dims: UVec3,
        values: Vec<f64>,
    }

    impl GridStructure for Fixed {
        fn dimensions(&self) -> UVec3 {
            self.dims
        }
        fn origin(&self) -> Vec3 {
            Vec3::new(1.0, 0.0, 0.0)
        }
        fn spacing(&self) -> Vec3 {
            Vec3::new(0.5, 1.0, 2.0)
        }
        fn field_name(&self) -> &str {
            "f"
        }
        fn cell_values(&self) -> &[f64] {
            &self.values
        }
        fn data_range(&self) -> (f64, f64) {
            (0.0, 1.0)
        }
    }

    #[test]
    fn test_flat_grid_cells() {
        let grid = Fixed {
            dims: UVec3::new(4, 3, 1),
            values: (0..6).map(f64::from).collect(),
        };
        assert_eq!(grid.cell_dim(), UVec3::new(3, 2, 1));
        assert_eq!(grid.num_cells(), 6);
        // row-major over (3, 2): value at (i, j) is i * 2 + j
        assert_eq!(grid.cell_value(2, 1, 0), 5.0);
        assert_eq!(grid.cell_value(1, 0, 0), 2.0);
    }

    #[test]
    fn test_cell_index_last_axis_fastest() {
        let grid = Fixed {
            dims: UVec3::new(3, 4, 5),
            values: vec![0.0; 2 * 3 * 4],
        };
        assert_eq!(grid.cell_index(0, 0, 1), 1);
        assert_eq!(grid.cell_index(0, 1, 0), 4);
        assert_eq!(grid.cell_index(1, 0, 0), 12);
    }

    #[test]
    fn test_bounding_box() {
        let grid = Fixed {
            dims: UVec3::new(3, 4, 1),
            values: vec![0.0; 6],
        };
        let (min, max) = grid.bounding_box();
        assert_eq!(min, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(max, Vec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn test_out_of_range_is_nan() {
        let grid = Fixed {
            dims: UVec3::new(2, 2, 2),
            values: vec![1.0],
        };
        assert!(grid.cell_value(5, 5, 5).is_nan());
    }

    #[test]
    fn test_single_axis_overflow_is_nan() {
        let grid = Fixed {
            dims: UVec3::new(3, 3, 3),
            values: (0..8).map(f64::from).collect(),
        };
        assert!(grid.cell_value(0, 0, 2).is_nan());
        assert!(grid.cell_value(0, 2, 0).is_nan());
        assert!(grid.cell_value(2, 0, 0).is_nan());
        assert_eq!(grid.cell_value(0, 1, 0), 2.0);
        assert_eq!(grid.cell_value(1, 1, 1), 7.0);
    }
}
