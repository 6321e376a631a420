//! CPU framebuffer with a depth buffer.

use glam::Vec3;

/// Converts a linear color in `[0, 1]` to 8-bit RGBA.
#[must_use]
pub fn to_rgba8(color: Vec3) -> [u8; 4] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// An RGBA8 color target plus a depth target, stored row by row from the
/// top-left corner.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<[u8; 4]>,
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Creates a framebuffer cleared to `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Vec3) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![to_rgba8(background); len],
            depth: vec![f32::INFINITY; len],
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets color to `background` and depth to infinity.
    pub fn clear(&mut self, background: Vec3) {
        self.color.fill(to_rgba8(background));
        self.depth.fill(f32::INFINITY);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the framebuffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.color[i])
    }

    /// Returns the pixel at `(x, y)` as a linear color.
    #[must_use]
    pub fn color_at(&self, x: u32, y: u32) -> Vec3 {
        self.pixel(x, y).map_or(Vec3::ZERO, |[r, g, b, _]| {
            Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
        })
    }

    /// Returns the stored depth at `(x, y)`.
    #[must_use]
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.index(x, y).map_or(f32::INFINITY, |i| self.depth[i])
    }

    /// Writes a pixel unconditionally, leaving depth untouched.
    pub fn set(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.color[i] = color;
        }
    }

    /// Writes a pixel if `depth` is closer than what is stored.
    ///
    /// Returns whether the pixel was written.
    pub fn set_if_closer(&mut self, x: u32, y: u32, depth: f32, color: [u8; 4]) -> bool {
        match self.index(x, y) {
            Some(i) if depth < self.depth[i] => {
                self.depth[i] = depth;
                self.color[i] = color;
                true
            }
            _ => false,
        }
    }

    /// Raw RGBA8 bytes, 4 per pixel.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_cleared() {
        let fb = Framebuffer::new(4, 3, Vec3::ONE);
        assert_eq!(fb.as_bytes().len(), 4 * 3 * 4);
        assert!(fb.as_bytes().iter().all(|&b| b == 255));
        assert_eq!(fb.depth_at(0, 0), f32::INFINITY);
    }

    #[test]
    fn test_depth_test() {
        let mut fb = Framebuffer::new(2, 2, Vec3::ZERO);
        assert!(fb.set_if_closer(1, 0, 0.5, [10, 20, 30, 255]));
        assert!(!fb.set_if_closer(1, 0, 0.7, [99, 99, 99, 255]));
        assert!(fb.set_if_closer(1, 0, 0.2, [1, 2, 3, 255]));
        assert_eq!(fb.pixel(1, 0), Some([1, 2, 3, 255]));
        assert_eq!(fb.depth_at(1, 0), 0.2);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(2, 2, Vec3::ZERO);
        fb.set(5, 5, [1, 1, 1, 255]);
        assert!(!fb.set_if_closer(2, 0, 0.0, [1, 1, 1, 255]));
        assert_eq!(fb.pixel(2, 0), None);
    }

    #[test]
    fn test_row_major_bytes() {
        let mut fb = Framebuffer::new(3, 2, Vec3::ZERO);
        fb.set(1, 1, [7, 8, 9, 255]);
        let offset = (3 + 1) * 4;
        assert_eq!(&fb.as_bytes()[offset..offset + 4], &[7, 8, 9, 255]);
    }

    #[test]
    fn test_clear_and_color_conversion() {
        let mut fb = Framebuffer::new(1, 1, Vec3::ZERO);
        fb.set_if_closer(0, 0, 0.1, [0, 0, 0, 255]);
        fb.clear(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(fb.pixel(0, 0), Some([255, 0, 255, 255]));
        assert_eq!(fb.depth_at(0, 0), f32::INFINITY);
        assert_eq!(fb.color_at(0, 0), Vec3::new(1.0, 0.0, 1.0));
    }
}
