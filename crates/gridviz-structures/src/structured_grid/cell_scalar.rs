//! Scalar field stored per grid cell.

/// A named scalar quantity with one value per grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellScalarField {
    name: String,
    values: Vec<f64>,
    data_min: f64,
    data_max: f64,
}

impl CellScalarField {
    /// Creates a new cell scalar field.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        let (data_min, data_max) = Self::compute_range(&values);
        Self {
            name: name.into(),
            values,
            data_min,
            data_max,
        }
    }

    fn compute_range(values: &[f64]) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &v in values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            (0.0, 1.0)
        } else {
            (min, max)
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets the data range.
    #[must_use]
    pub fn data_range(&self) -> (f64, f64) {
        (self.data_min, self.data_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_skips_non_finite() {
        let field = CellScalarField::new("t", vec![2.0, f64::NAN, -1.0, f64::INFINITY]);
        assert_eq!(field.data_range(), (-1.0, 2.0));
        assert_eq!(field.len(), 4);
    }

    #[test]
    fn test_range_fallback() {
        let field = CellScalarField::new("t", vec![f64::NAN]);
        assert_eq!(field.data_range(), (0.0, 1.0));
    }

    #[test]
    fn test_constant_range() {
        let field = CellScalarField::new("Spin", vec![1.0; 8]);
        assert_eq!(field.data_range(), (1.0, 1.0));
        assert_eq!(field.name(), "Spin");
    }
}
