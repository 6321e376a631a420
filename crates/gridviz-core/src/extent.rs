//! Grid extents expressed in point counts.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Expected extent of 3D simulation output, including the trailing boundary point.
pub const EXTENT_SIZE_3D: [usize; 3] = [101, 101, 51];

/// Expected extent of 2D simulation output, including the trailing boundary point.
pub const EXTENT_SIZE_2D: [usize; 2] = [101, 101];

/// Per-axis point counts describing a grid's resolution.
///
/// A grid of `100 x 100` cells has an extent of `(101, 101)`: one more point
/// than cells along every axis. A point count of 1 describes a flat axis
/// with zero cells along it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Extent(Vec<usize>);

impl Extent {
    /// Creates an extent, rejecting empty extents and zero point counts.
    pub fn new(points: Vec<usize>) -> Result<Self> {
        if points.is_empty() || points.contains(&0) {
            return Err(GridError::InvalidExtent(points));
        }
        Ok(Self(points))
    }

    /// The 3D extent used for volume output.
    #[must_use]
    pub fn volume() -> Self {
        Self(EXTENT_SIZE_3D.to_vec())
    }

    /// The 2D extent used for plane output.
    #[must_use]
    pub fn plane() -> Self {
        Self(EXTENT_SIZE_2D.to_vec())
    }

    /// Point counts per axis.
    #[must_use]
    pub fn points(&self) -> &[usize] {
        &self.0
    }

    /// Number of axes.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Cell counts per axis: the point count minus one along every axis.
    ///
    /// A point count of 1 maps to 0 cells. Callers build fixed global
    /// extents around this convention, so it is kept as is.
    #[must_use]
    pub fn cell_shape(&self) -> Vec<usize> {
        self.0.iter().map(|&p| p - 1).collect()
    }
}

impl TryFrom<Vec<usize>> for Extent {
    type Error = GridError;

    fn try_from(points: Vec<usize>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Extent> for Vec<usize> {
    fn from(extent: Extent) -> Self {
        extent.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_shape() {
        assert_eq!(Extent::volume().cell_shape(), vec![100, 100, 50]);
        assert_eq!(Extent::plane().cell_shape(), vec![100, 100]);
    }

    #[test]
    fn test_unit_point_count_gives_zero_cells() {
        let extent = Extent::new(vec![11, 1]).unwrap();
        assert_eq!(extent.cell_shape(), vec![10, 0]);
    }

    #[test]
    fn test_rejects_invalid_extents() {
        assert!(matches!(
            Extent::new(Vec::new()),
            Err(GridError::InvalidExtent(_))
        ));
        assert!(matches!(
            Extent::new(vec![101, 0, 51]),
            Err(GridError::InvalidExtent(p)) if p == vec![101, 0, 51]
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Extent = serde_json::from_str("[5, 6]").unwrap();
        assert_eq!(ok.points(), &[5, 6]);

        let bad: std::result::Result<Extent, _> = serde_json::from_str("[5, 0]");
        assert!(bad.is_err());
    }
}
