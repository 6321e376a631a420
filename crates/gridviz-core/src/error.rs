//! Error types for gridviz grid handling.

use thiserror::Error;

/// Errors raised while validating numeric arrays or assembling grids.
///
/// None of these leave side effects behind: they are raised before any
/// rendering resource is acquired.
#[derive(Error, Debug)]
pub enum GridError {
    /// The array shape does not equal the cell shape derived from the extent.
    #[error(
        "Array dimensions {} do not match the expected dimensions {}.",
        format_shape(.actual),
        format_shape(.expected)
    )]
    ShapeMismatch {
        actual: Vec<usize>,
        expected: Vec<usize>,
    },

    /// An extent was empty or had a zero point count.
    #[error("invalid extent {0:?}: extents need at least one axis and every point count must be >= 1")]
    InvalidExtent(Vec<usize>),

    /// An array shape was empty, had a zero-length axis, or does not fit a grid.
    #[error("invalid array shape {0:?}: {1}")]
    InvalidShape(Vec<usize>, &'static str),

    /// Only planes (rank 2) and volumes (rank 3) can be turned into grids.
    #[error("cannot build a structured grid from a rank-{0} array (expected rank 2 or 3)")]
    UnsupportedDimensionality(usize),

    /// Grid spacing must be strictly positive along every axis.
    #[error("grid spacing must be > 0 along every axis, got {axis} = {value}")]
    InvalidSpacing { axis: usize, value: f32 },

    /// Data size mismatch between a cell field and the grid it is attached to.
    #[error("cell field size mismatch: expected {expected}, got {actual}")]
    FieldSizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Formats a shape the way array libraries print tuples: `(100, 100)`, `(5,)`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({single},)"),
        _ => {
            let inner: Vec<String> = shape.iter().map(ToString::to_string).collect();
            format!("({})", inner.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(&[100, 100]), "(100, 100)");
        assert_eq!(format_shape(&[7]), "(7,)");
        assert_eq!(format_shape(&[]), "()");
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = GridError::ShapeMismatch {
            actual: vec![100, 100],
            expected: vec![100, 100, 50],
        };
        assert_eq!(
            err.to_string(),
            "Array dimensions (100, 100) do not match the expected dimensions (100, 100, 50)."
        );
    }
}
