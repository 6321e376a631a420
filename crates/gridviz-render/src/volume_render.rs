//! Volume rendering by front-to-back ray marching.

use glam::{UVec3, Vec3};
use gridviz_core::GridStructure;

use crate::camera::Camera;
use crate::color_maps::{normalize, ColorMap};
use crate::framebuffer::{to_rgba8, Framebuffer};

/// Upper bound on samples along the bounding box diagonal.
const SAMPLES_PER_DIAGONAL: f32 = 128.0;
/// Fraction of the diagonal over which a fully opaque value saturates.
const OPACITY_UNIT_FRACTION: f32 = 0.05;
/// Accumulated opacity at which a ray stops marching.
const EARLY_EXIT_ALPHA: f32 = 0.99;

/// Linear opacity transfer function: 0 at the data minimum, 1 at the maximum.
#[must_use]
pub fn opacity(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Entry and exit distances of a ray through an axis-aligned box.
#[must_use]
pub fn intersect_box(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<(f32, f32)> {
    let inv = direction.recip();
    let t0 = (min - origin) * inv;
    let t1 = (max - origin) * inv;
    let near = t0.min(t1);
    let far = t0.max(t1);

    // NaN components come from a zero direction on a flat axis; ignore them
    let enter = near
        .to_array()
        .into_iter()
        .filter(|t| !t.is_nan())
        .fold(0.0_f32, f32::max);
    let exit = far
        .to_array()
        .into_iter()
        .filter(|t| !t.is_nan())
        .fold(f32::INFINITY, f32::min);
    (enter <= exit && exit.is_finite()).then_some((enter, exit))
}

/// Cell containing world position `p`, clamped to the grid.
fn cell_at(grid: &dyn GridStructure, p: Vec3) -> UVec3 {
    let cells = grid.cell_dim();
    let local = ((p - grid.origin()) / grid.spacing()).floor().max(Vec3::ZERO);
    local.as_uvec3().min(cells - UVec3::ONE)
}

/// Ray-marches `grid` and composites the result over the current contents of
/// `fb`.
pub fn draw_volume(
    fb: &mut Framebuffer,
    camera: &Camera,
    grid: &dyn GridStructure,
    colormap: &ColorMap,
) {
    let (min, max) = grid.bounding_box();
    let diagonal = grid.length_scale().max(f32::EPSILON);
    let range = grid.data_range();
    if range.0 >= range.1 {
        log::warn!(
            "field '{}' is constant ({}); volume uses a uniform opacity",
            grid.field_name(),
            range.0
        );
    }

    let step = (diagonal / SAMPLES_PER_DIAGONAL).max(grid.spacing().min_element() * 0.5);
    let extinction = 1.0 / (diagonal * OPACITY_UNIT_FRACTION);
    let (width, height) = (fb.width(), fb.height());
    let rays = camera.rays(width, height);

    for py in 0..height {
        for px in 0..width {
            let (origin, direction) = rays.through(px, py);
            let Some((enter, exit)) = intersect_box(origin, direction, min, max) else {
                continue;
            };

            let mut color = Vec3::ZERO;
            let mut alpha = 0.0_f32;
            let mut t = enter + step * 0.5;
            while t < exit && alpha < EARLY_EXIT_ALPHA {
                let cell = cell_at(grid, origin + direction * t);
                let value = grid.cell_value(cell.x, cell.y, cell.z);
                if value.is_finite() {
                    let s = normalize(value, range);
                    let a = 1.0 - (-opacity(s) * extinction * step).exp();
                    color += (1.0 - alpha) * a * colormap.sample(s);
                    alpha += (1.0 - alpha) * a;
                }
                t += step;
            }

            if alpha > 0.0 {
                let out = color + (1.0 - alpha) * fb.color_at(px, py);
                fb.set(px, py, to_rgba8(out));
            }
        }
    }
}
