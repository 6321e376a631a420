//! Surface rendering of structured grid boundaries.
//!
//! Every boundary cell face is drawn as one flat-shaded quad colored by the
//! value of the cell behind it. A grid with a size-1 axis has a single
//! boundary sheet, which is the whole grid.

use glam::{UVec3, Vec3};
use gridviz_core::GridStructure;

use crate::camera::Camera;
use crate::color_maps::{normalize, ColorMap};
use crate::framebuffer::{to_rgba8, Framebuffer};

/// Ambient share of the flat shading.
const AMBIENT: f32 = 0.35;
/// Edge lines are drawn within this many pixels of a face border.
const EDGE_WIDTH: f32 = 0.75;
const EDGE_COLOR: [u8; 4] = [40, 40, 40, 255];

/// Style for a surface actor.
#[derive(Debug, Clone, Default)]
pub struct MeshStyle {
    /// Color map applied to the cell field.
    pub colormap: ColorMap,
    /// Whether cell borders are outlined.
    pub show_edges: bool,
}

/// One boundary sheet of the grid: the plane `index` along `axis`, seen from
/// the cell layer `cell` next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sheet {
    axis: usize,
    index: u32,
    cell: u32,
}

fn boundary_sheets(dims: UVec3, cells: UVec3) -> Vec<Sheet> {
    let dims = dims.to_array();
    let cells = cells.to_array();
    let mut sheets = Vec::new();

    for axis in 0..3 {
        let (u, v) = in_plane_axes(axis);
        // a sheet spanning a flat axis has no area
        if dims[u] == 1 || dims[v] == 1 {
            continue;
        }
        sheets.push(Sheet {
            axis,
            index: 0,
            cell: 0,
        });
        if dims[axis] > 1 {
            sheets.push(Sheet {
                axis,
                index: dims[axis] - 1,
                cell: cells[axis] - 1,
            });
        }
    }
    sheets
}

fn in_plane_axes(axis: usize) -> (usize, usize) {
    match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Draws the boundary surface of `grid` into `fb`.
pub fn draw_surface(
    fb: &mut Framebuffer,
    camera: &Camera,
    grid: &dyn GridStructure,
    style: &MeshStyle,
) {
    let dims = grid.dimensions();
    let cells = grid.cell_dim();
    let range = grid.data_range();
    let light = camera.light_direction();
    let (width, height) = (fb.width(), fb.height());

    let point = |p: [u32; 3]| -> Vec3 {
        grid.origin() + UVec3::from_array(p).as_vec3() * grid.spacing()
    };

    for sheet in boundary_sheets(dims, cells) {
        let (u, v) = in_plane_axes(sheet.axis);
        let mut normal = Vec3::ZERO;
        normal[sheet.axis] = 1.0;
        let shade = AMBIENT + (1.0 - AMBIENT) * normal.dot(light).abs();

        for a in 0..cells[u] {
            for b in 0..cells[v] {
                let mut cell = [0u32; 3];
                cell[sheet.axis] = sheet.cell;
                cell[u] = a;
                cell[v] = b;
                let value = grid.cell_value(cell[0], cell[1], cell[2]);
                let color = to_rgba8(style.colormap.sample(normalize(value, range)) * shade);

                let corner = |da: u32, db: u32| {
                    let mut p = [0u32; 3];
                    p[sheet.axis] = sheet.index;
                    p[u] = a + da;
                    p[v] = b + db;
                    camera.project(point(p), width, height)
                };
                let quad = [corner(0, 0), corner(1, 0), corner(1, 1), corner(0, 1)];
                if let [Some(p0), Some(p1), Some(p2), Some(p3)] = quad {
                    let edges = style.show_edges.then_some(EDGE_COLOR);
                    fill_quad(fb, [p0, p1, p2, p3], color, edges);
                }
            }
        }
    }
}

fn edge_function(a: Vec3, b: Vec3, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Interpolated depth at `(px, py)` if it lies inside triangle `abc`.
fn triangle_depth(a: Vec3, b: Vec3, c: Vec3, px: f32, py: f32) -> Option<f32> {
    let area = edge_function(a, b, c.x, c.y);
    if area.abs() <= f32::EPSILON {
        return None;
    }
    let wa = edge_function(b, c, px, py) / area;
    let wb = edge_function(c, a, px, py) / area;
    let wc = edge_function(a, b, px, py) / area;
    let tolerance = -1e-4;
    (wa >= tolerance && wb >= tolerance && wc >= tolerance)
        .then_some(wa * a.z + wb * b.z + wc * c.z)
}

/// Rasterizes a convex screen-space quad with depth testing.
///
/// Corners are `(x, y, depth)`. When `edge_color` is set, pixels close to the
/// quad border take that color instead.
pub fn fill_quad(fb: &mut Framebuffer, q: [Vec3; 4], color: [u8; 4], edge_color: Option<[u8; 4]>) {
    let min_x = q.iter().map(|p| p.x).fold(f32::INFINITY, f32::min).floor().max(0.0);
    let min_y = q.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor().max(0.0);
    let max_x = q.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max).ceil();
    let max_y = q.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil();
    if max_x < 0.0 || max_y < 0.0 {
        return;
    }
    let max_x = max_x.min(fb.width() as f32 - 1.0);
    let max_y = max_y.min(fb.height() as f32 - 1.0);

    let edge_lengths: [f32; 4] =
        std::array::from_fn(|i| (q[(i + 1) % 4] - q[i]).truncate().length().max(1e-6));

    for py in min_y as u32..=max_y as u32 {
        for px in min_x as u32..=max_x as u32 {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            let depth = triangle_depth(q[0], q[1], q[2], cx, cy)
                .or_else(|| triangle_depth(q[0], q[2], q[3], cx, cy));
            let Some(depth) = depth else {
                continue;
            };

            let on_edge = edge_color.is_some()
                && (0..4).any(|i| {
                    let d = edge_function(q[i], q[(i + 1) % 4], cx, cy).abs() / edge_lengths[i];
                    d < EDGE_WIDTH
                });
            let pixel = match edge_color {
                Some(edge) if on_edge => edge,
                _ => color,
            };
            fb.set_if_closer(px, py, depth, pixel);
        }
    }
}
