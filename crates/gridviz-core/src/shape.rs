//! Shape validation of numeric arrays against grid extents.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{GridError, Result};
use crate::extent::Extent;

/// Checks that `shape` equals the cell shape of `extent`.
///
/// The expected shape is the extent minus one along every axis. Shapes must
/// agree in axis count, order, and size; anything else is a
/// [`GridError::ShapeMismatch`] carrying both shapes.
pub fn check_shape(shape: &[usize], extent: &Extent) -> Result<()> {
    let expected = extent.cell_shape();
    if shape != expected.as_slice() {
        log::debug!("shape check failed: {shape:?} vs expected {expected:?}");
        return Err(GridError::ShapeMismatch {
            actual: shape.to_vec(),
            expected,
        });
    }
    Ok(())
}

/// Checks the dimensions of an array against an extent.
///
/// Pure and side-effect free; see [`check_shape`].
pub fn check_array_dimensions<S, D>(array: &ArrayBase<S, D>, extent: &Extent) -> Result<()>
where
    S: Data,
    D: Dimension,
{
    check_shape(array.shape(), extent)
}
