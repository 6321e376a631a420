//! Color map system.

use glam::Vec3;

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// The viridis color map, used for every render.
    #[must_use]
    pub fn viridis() -> Self {
        Self::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        )
    }

    /// Samples the color map at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec3 {
        // NaN clamps to NaN, map it to the low end
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        let idx = (t * n as f32).floor() as usize;
        let idx = idx.min(n - 1);
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::viridis()
    }
}

/// Maps a value into `[0, 1]` over a data range.
///
/// A degenerate range (constant field) maps everything to the middle of the map.
#[must_use]
pub fn normalize(value: f64, (min, max): (f64, f64)) -> f32 {
    let span = max - min;
    if span > 0.0 {
        ((value - min) / span) as f32
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_endpoints() {
        let cmap = ColorMap::viridis();
        assert_eq!(cmap.sample(0.0), cmap.colors[0]);
        assert_eq!(cmap.sample(1.0), cmap.colors[10]);
        assert_eq!(cmap.sample(-3.0), cmap.colors[0]);
        assert_eq!(cmap.sample(f32::NAN), cmap.colors[0]);
    }

    #[test]
    fn test_sample_interpolates() {
        let cmap = ColorMap::new("bw", vec![Vec3::ZERO, Vec3::ONE]);
        let mid = cmap.sample(0.5);
        assert!((mid - Vec3::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5.0, (0.0, 10.0)), 0.5);
        assert_eq!(normalize(1.0, (1.0, 1.0)), 0.5);
        assert!((normalize(12.0, (0.0, 10.0)) - 1.2).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_samples_stay_inside_the_map(t in -2.0f32..3.0) {
            let cmap = ColorMap::viridis();
            let c = cmap.sample(t);
            let lo = cmap.colors.iter().fold(Vec3::splat(f32::INFINITY), |a, &b| a.min(b));
            let hi = cmap.colors.iter().fold(Vec3::splat(f32::NEG_INFINITY), |a, &b| a.max(b));
            prop_assert!(c.cmpge(lo - 1e-6).all() && c.cmple(hi + 1e-6).all());
        }
    }
}
