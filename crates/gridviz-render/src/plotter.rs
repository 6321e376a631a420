//! Off-screen plotting context.
//!
//! A [`Plotter`] owns a CPU framebuffer for the lifetime of one render. Actors
//! borrow the grids they draw; nothing is copied or retained after the
//! plotter is dropped.

use glam::Vec3;
use gridviz_core::{GridStructure, DEFAULT_WINDOW_SIZE};
use std::path::Path;

use crate::camera::Camera;
use crate::color_maps::ColorMap;
use crate::error::{RenderError, RenderResult};
use crate::framebuffer::Framebuffer;
use crate::scalar_bar::{draw_scalar_bar, text_color, ScalarBarArgs};
use crate::screenshot::save_image;
use crate::surface_render::{draw_surface, MeshStyle};
use crate::volume_render::draw_volume;

/// Largest accepted framebuffer side, in pixels.
pub const MAX_WINDOW_SIDE: u32 = 16384;

/// Settings for an off-screen plotting context.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterOptions {
    /// Framebuffer size in pixels (width, height).
    pub window_size: [u32; 2],
    /// Background color.
    pub background_color: Vec3,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            background_color: Vec3::ONE,
        }
    }
}

enum Actor<'a> {
    Mesh {
        grid: &'a dyn GridStructure,
        style: MeshStyle,
        scalar_bar: Option<ScalarBarArgs>,
    },
    Volume {
        grid: &'a dyn GridStructure,
        colormap: ColorMap,
        scalar_bar: Option<ScalarBarArgs>,
    },
}

impl Actor<'_> {
    fn grid(&self) -> &dyn GridStructure {
        match self {
            Actor::Mesh { grid, .. } | Actor::Volume { grid, .. } => *grid,
        }
    }

    fn legend(&self) -> Option<(&ScalarBarArgs, &ColorMap)> {
        match self {
            Actor::Mesh {
                style, scalar_bar, ..
            } => scalar_bar.as_ref().map(|args| (args, &style.colormap)),
            Actor::Volume {
                colormap,
                scalar_bar,
                ..
            } => scalar_bar.as_ref().map(|args| (args, colormap)),
        }
    }
}

/// A headless plotting context.
///
/// The framebuffer is released by [`Plotter::close`] or when the plotter is
/// dropped, whichever comes first.
pub struct Plotter<'a> {
    options: PlotterOptions,
    framebuffer: Option<Framebuffer>,
    camera: Camera,
    actors: Vec<Actor<'a>>,
    rendered: bool,
}

impl<'a> Plotter<'a> {
    /// Acquires an off-screen context with the given options.
    ///
    /// Each side must lie in `1..=MAX_WINDOW_SIDE`.
    pub fn off_screen(options: PlotterOptions) -> RenderResult<Self> {
        let [width, height] = options.window_size;
        let valid = 1..=MAX_WINDOW_SIDE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(RenderError::InvalidWindowSize { width, height });
        }

        log::debug!("acquired off-screen context {width}x{height}");
        Ok(Self {
            framebuffer: Some(Framebuffer::new(width, height, options.background_color)),
            camera: Camera::new(width as f32 / height as f32),
            actors: Vec::new(),
            rendered: false,
            options,
        })
    }

    /// Returns true once the context has been released.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.framebuffer.is_none()
    }

    /// Returns the camera used for the last render.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the number of actors added so far.
    #[must_use]
    pub fn num_actors(&self) -> usize {
        self.actors.len()
    }

    fn ensure_open(&self) -> RenderResult<()> {
        if self.is_closed() {
            Err(RenderError::ContextClosed)
        } else {
            Ok(())
        }
    }

    /// Adds the boundary surface of `grid`, colored by its cell field.
    pub fn add_mesh(
        &mut self,
        grid: &'a dyn GridStructure,
        style: MeshStyle,
        scalar_bar: Option<ScalarBarArgs>,
    ) -> RenderResult<()> {
        self.ensure_open()?;
        if let Some(args) = &scalar_bar {
            args.validate()?;
        }
        self.actors.push(Actor::Mesh {
            grid,
            style,
            scalar_bar,
        });
        self.rendered = false;
        Ok(())
    }

    /// Adds a volume rendering of `grid`'s cell field.
    pub fn add_volume(
        &mut self,
        grid: &'a dyn GridStructure,
        colormap: ColorMap,
        scalar_bar: Option<ScalarBarArgs>,
    ) -> RenderResult<()> {
        self.ensure_open()?;
        if let Some(args) = &scalar_bar {
            args.validate()?;
        }
        self.actors.push(Actor::Volume {
            grid,
            colormap,
            scalar_bar,
        });
        self.rendered = false;
        Ok(())
    }

    /// Renders one frame into the framebuffer.
    pub fn show(&mut self) -> RenderResult<()> {
        let fb = self
            .framebuffer
            .as_mut()
            .ok_or(RenderError::ContextClosed)?;
        fb.clear(self.options.background_color);

        if let Some((min, max)) = scene_bounds(&self.actors) {
            self.camera.look_at_box(min, max);
        }

        // opaque surfaces first so volumes composite over them
        for actor in &self.actors {
            if let Actor::Mesh { grid, style, .. } = actor {
                draw_surface(fb, &self.camera, *grid, style);
            }
        }
        for actor in &self.actors {
            if let Actor::Volume { grid, colormap, .. } = actor {
                draw_volume(fb, &self.camera, *grid, colormap);
            }
        }

        let ink = text_color(self.options.background_color);
        let legends = self.actors.iter().filter_map(|a| a.legend().map(|l| (a, l)));
        for (slot, (actor, (args, colormap))) in legends.enumerate() {
            let grid = actor.grid();
            let title = args.resolved_title(grid.field_name());
            draw_scalar_bar(
                fb,
                args,
                title,
                grid.data_range(),
                colormap,
                ink,
                slot as u32,
            );
        }

        self.rendered = true;
        Ok(())
    }

    /// Returns the framebuffer contents, rendering first if needed.
    pub fn image(&mut self) -> RenderResult<&Framebuffer> {
        if !self.rendered {
            self.show()?;
        }
        self.framebuffer.as_ref().ok_or(RenderError::ContextClosed)
    }

    /// Writes the current view to `path`. The format follows the extension.
    pub fn screenshot(&mut self, path: impl AsRef<Path>) -> RenderResult<()> {
        let fb = self.image()?;
        save_image(path.as_ref(), fb.as_bytes(), fb.width(), fb.height())
    }

    /// Releases the framebuffer. Later calls fail with
    /// [`RenderError::ContextClosed`].
    pub fn close(&mut self) -> RenderResult<()> {
        self.ensure_open()?;
        self.release();
        Ok(())
    }

    fn release(&mut self) {
        if self.framebuffer.take().is_some() {
            self.actors.clear();
            log::debug!("released off-screen context");
        }
    }
}

impl Drop for Plotter<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

fn scene_bounds(actors: &[Actor<'_>]) -> Option<(Vec3, Vec3)> {
    actors
        .iter()
        .map(|a| a.grid().bounding_box())
        .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;

    struct Plane {
        values: Vec<f64>,
    }

    impl GridStructure for Plane {
        fn dimensions(&self) -> UVec3 {
            UVec3::new(5, 5, 1)
        }
        fn origin(&self) -> Vec3 {
            Vec3::ZERO
        }
        fn spacing(&self) -> Vec3 {
            Vec3::ONE
        }
        fn field_name(&self) -> &str {
            "Spin"
        }
        fn cell_values(&self) -> &[f64] {
            &self.values
        }
        fn data_range(&self) -> (f64, f64) {
            (0.0, 15.0)
        }
    }

    fn plane() -> Plane {
        Plane {
            values: (0..16).map(f64::from).collect(),
        }
    }

    fn small() -> PlotterOptions {
        PlotterOptions {
            window_size: [64, 48],
            ..PlotterOptions::default()
        }
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let options = PlotterOptions {
            window_size: [0, 10],
            ..PlotterOptions::default()
        };
        assert!(matches!(
            Plotter::off_screen(options),
            Err(RenderError::InvalidWindowSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        for window_size in [[u32::MAX, u32::MAX], [65536, 65536], [MAX_WINDOW_SIDE + 1, 1]] {
            let options = PlotterOptions {
                window_size,
                ..PlotterOptions::default()
            };
            assert!(matches!(
                Plotter::off_screen(options),
                Err(RenderError::InvalidWindowSize { .. })
            ));
        }
        let largest = PlotterOptions {
            window_size: [MAX_WINDOW_SIDE, 1],
            ..PlotterOptions::default()
        };
        assert!(Plotter::off_screen(largest).is_ok());
    }

    #[test]
    fn test_default_window_size() {
        assert_eq!(PlotterOptions::default().window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_render_mesh() {
        let grid = plane();
        let mut plotter = Plotter::off_screen(small()).unwrap();
        plotter.add_mesh(&grid, MeshStyle::default(), None).unwrap();
        let fb = plotter.image().unwrap();
        assert_ne!(fb.pixel(32, 24), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_camera_fits_scene() {
        let grid = plane();
        let mut plotter = Plotter::off_screen(small()).unwrap();
        plotter.add_volume(&grid, ColorMap::viridis(), None).unwrap();
        plotter.show().unwrap();
        assert_eq!(plotter.camera().target, Vec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_invalid_scalar_bar_is_rejected() {
        let grid = plane();
        let mut plotter = Plotter::off_screen(small()).unwrap();
        let args = ScalarBarArgs {
            n_labels: 0,
            ..ScalarBarArgs::default()
        };
        let result = plotter.add_volume(&grid, ColorMap::viridis(), Some(args));
        assert!(matches!(result, Err(RenderError::InvalidScalarBar(_))));
        assert_eq!(plotter.num_actors(), 0);
    }

    #[test]
    fn test_calls_after_close_fail() {
        let grid = plane();
        let mut plotter = Plotter::off_screen(small()).unwrap();
        plotter.add_mesh(&grid, MeshStyle::default(), None).unwrap();
        plotter.close().unwrap();

        assert!(plotter.is_closed());
        assert!(matches!(plotter.show(), Err(RenderError::ContextClosed)));
        assert!(matches!(
            plotter.add_mesh(&grid, MeshStyle::default(), None),
            Err(RenderError::ContextClosed)
        ));
        assert!(matches!(
            plotter.screenshot("unused.png"),
            Err(RenderError::ContextClosed)
        ));
        assert!(matches!(plotter.close(), Err(RenderError::ContextClosed)));
    }

    #[test]
    fn test_screenshot_writes_png() {
        let grid = plane();
        let path = std::env::temp_dir().join(format!("gridviz_plotter_{}.png", std::process::id()));

        let mut plotter = Plotter::off_screen(small()).unwrap();
        plotter
            .add_mesh(&grid, MeshStyle::default(), Some(ScalarBarArgs::default()))
            .unwrap();
        plotter.screenshot(&path).unwrap();
        plotter.close().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        std::fs::remove_file(&path).unwrap();
    }
}
